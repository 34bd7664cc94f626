//! Admin dashboard model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub total_campaigns: usize,
    pub pending_campaigns: usize,
    pub total_influencers: usize,
    /// Completed campaigns as a whole percentage of all campaigns
    pub success_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Campaign,
    User,
}

/// One line of the admin recent-activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub id: String,
    pub title: String,
    pub user: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Everything the admin dashboard shows, from one round of fetches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub activities: Vec<Activity>,
}
