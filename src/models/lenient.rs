//! Serde helpers for numeric fields the backend sometimes sends as strings.
//!
//! Multipart submissions reach the server as text, so older records may carry
//! `"25"` where newer ones carry `25`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Float(f64),
    Text(String),
}

pub fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Int(v)) => Some(v),
        Some(NumberOrString::Float(v)) if v >= 0.0 && v.is_finite() => Some(v as u64),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_u64(deserializer)?.and_then(|v| u32::try_from(v).ok()))
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Int(v)) => Some(v as f64),
        Some(NumberOrString::Float(v)) => Some(v),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
