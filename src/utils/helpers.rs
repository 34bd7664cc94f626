//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

use chrono::{DateTime, Utc, Duration};
use uuid::Uuid;

/// Generate a new request correlation id
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Resolve a server-relative media path against the backend base URL.
///
/// Absolute http(s) URLs are returned as-is.
pub fn media_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Format a count with thousands separators
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format a timestamp relative to `now`
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);

    if diff < Duration::minutes(1) {
        "just now".to_string()
    } else if diff < Duration::hours(1) {
        format!("{} minutes ago", diff.num_minutes())
    } else if diff < Duration::days(1) {
        format!("{} hours ago", diff.num_hours())
    } else if diff < Duration::weeks(1) {
        format!("{} days ago", diff.num_days())
    } else {
        format_timestamp(timestamp)
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// True when a form field holds something other than whitespace
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
