//! Campaign model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::lenient;
use super::media::MediaAttachment;
use crate::utils::errors::{InfluenceHubError, Result};
use crate::utils::helpers::is_present;

/// Lifecycle tag set by the backend. Transitions are server-owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Approved,
    Accepted,
    Rejected,
    Completed,
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Pending => "pending",
            CampaignStatus::Approved => "approved",
            CampaignStatus::Accepted => "accepted",
            CampaignStatus::Rejected => "rejected",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Unknown => "unknown",
        }
    }

    /// Admins may only approve or reject campaigns still pending
    pub fn awaits_review(self) -> bool {
        matches!(self, CampaignStatus::Pending)
    }

    /// Campaigns influencers can be booked onto
    pub fn is_bookable(self) -> bool {
        matches!(self, CampaignStatus::Accepted)
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CampaignStatus {
    type Err = InfluenceHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(CampaignStatus::Pending),
            "approved" => Ok(CampaignStatus::Approved),
            "accepted" => Ok(CampaignStatus::Accepted),
            "rejected" => Ok(CampaignStatus::Rejected),
            "completed" => Ok(CampaignStatus::Completed),
            other => Err(InfluenceHubError::Validation(format!("Unknown campaign status: {}", other))),
        }
    }
}

/// The creator summary the admin endpoints populate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorSummary {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `createdBy` is either populated or a bare user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatorRef {
    Populated(CreatorSummary),
    Id(String),
}

impl CreatorRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            CreatorRef::Populated(summary) => summary.id.as_deref(),
            CreatorRef::Id(id) => Some(id),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CreatorRef::Populated(summary) => summary.name.as_deref(),
            CreatorRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub budget: Option<f64>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_by: Option<CreatorRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Campaign {
    pub fn creator_name(&self) -> Option<&str> {
        self.created_by.as_ref().and_then(CreatorRef::name)
    }
}

/// Summary figures served by `/api/campaigns/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignStats {
    pub total_campaigns: u64,
    pub pending_campaigns: u64,
    pub total_influencers: u64,
    pub success_rate: u32,
}

/// Fields submitted when creating or editing a campaign
#[derive(Debug, Clone, Default)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub budget: String,
    pub images: Vec<MediaAttachment>,
}

impl CampaignForm {
    pub fn validate(&self) -> Result<()> {
        if !is_present(&self.title)
            || !is_present(&self.description)
            || !is_present(&self.budget)
            || self.images.is_empty()
        {
            return Err(InfluenceHubError::Validation(
                "All fields and at least one image are required.".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: CampaignStatus,
}
