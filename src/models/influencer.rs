//! Influencer model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::lenient;
use super::media::MediaAttachment;
use crate::utils::errors::{InfluenceHubError, Result};
use crate::utils::helpers::is_present;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Non-empty links as `(platform, url)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("instagram", self.instagram.as_deref()),
            ("youtube", self.youtube.as_deref()),
            ("tiktok", self.tiktok.as_deref()),
            ("twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.filter(|u| is_present(u)).map(|u| (platform, u)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u64")]
    pub followers: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Influencer {
    /// Image shown on cards: the profile image, else the first media item
    pub fn primary_image(&self) -> Option<&str> {
        self.profile_image
            .as_deref()
            .filter(|p| is_present(p))
            .or_else(|| self.media.first().map(String::as_str))
    }

    pub fn primary_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or("No category")
    }
}

/// Fields submitted when creating or editing an influencer.
///
/// Numeric fields hold what the user typed; the server does the parsing.
#[derive(Debug, Clone, Default)]
pub struct InfluencerForm {
    pub name: String,
    pub age: String,
    pub followers: String,
    pub description: String,
    pub categories: Vec<String>,
    pub social_links: SocialLinks,
    pub media: Vec<MediaAttachment>,
}

impl InfluencerForm {
    /// Pre-fill the edit form from an existing record
    pub fn from_influencer(influencer: &Influencer) -> Self {
        Self {
            name: influencer.name.clone(),
            age: influencer.age.map(|a| a.to_string()).unwrap_or_default(),
            followers: influencer.followers.map(|f| f.to_string()).unwrap_or_default(),
            description: influencer.description.clone().unwrap_or_default(),
            categories: influencer.categories.clone(),
            social_links: influencer.social_links.clone(),
            media: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_present(&self.name) || !is_present(&self.followers) {
            return Err(InfluenceHubError::Validation(
                "Name and followers are required!".to_string(),
            ));
        }
        Ok(())
    }

    /// Social links as the JSON object the backend expects, empty strings included
    pub fn social_links_json(&self) -> serde_json::Value {
        let link = |v: &Option<String>| v.clone().unwrap_or_default();
        serde_json::json!({
            "instagram": link(&self.social_links.instagram),
            "youtube": link(&self.social_links.youtube),
            "twitter": link(&self.social_links.twitter),
            "tiktok": link(&self.social_links.tiktok),
        })
    }
}
