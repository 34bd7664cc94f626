//! Admin service
//!
//! User and campaign moderation under `/api/admin`, plus the dashboard
//! aggregation: statistics and a recent-activity feed derived from the
//! user, campaign and influencer collections.

use std::cmp::Ordering;

use reqwest::Method;
use tracing::debug;

use super::http::{path_segment, ApiClient};
use super::influencer::INFLUENCERS_PATH;
use crate::models::admin::{Activity, ActivityKind, AdminDashboard, AdminStats};
use crate::models::campaign::{Campaign, CampaignStatus, StatusUpdateRequest};
use crate::models::influencer::Influencer;
use crate::models::user::User;
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

pub const ADMIN_USERS_PATH: &str = "/api/admin/users";
pub const ADMIN_CAMPAIGNS_PATH: &str = "/api/admin/campaigns";

/// Length of the recent-activity feed
pub const ACTIVITY_FEED_LEN: usize = 5;

#[derive(Clone, Debug)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn users(&self, token: &str) -> Result<Vec<User>> {
        self.api.get_json(token, ADMIN_USERS_PATH).await
    }

    pub async fn delete_user(&self, token: &str, id: &str) -> Result<()> {
        let path = format!("{}/{}", ADMIN_USERS_PATH, path_segment(id));
        self.api.send_discarding_body(Method::DELETE, token, &path).await?;
        log_admin_action("delete_user", id, None);
        Ok(())
    }

    /// Every campaign on the platform, creators populated
    pub async fn campaigns(&self, token: &str) -> Result<Vec<Campaign>> {
        self.api.get_json(token, ADMIN_CAMPAIGNS_PATH).await
    }

    /// Approve or reject a campaign. Legality of the transition is checked server-side.
    pub async fn update_campaign_status(
        &self,
        token: &str,
        id: &str,
        status: CampaignStatus,
    ) -> Result<serde_json::Value> {
        let path = format!("{}/{}/status", ADMIN_CAMPAIGNS_PATH, path_segment(id));
        let response = self
            .api
            .send_json_body(Method::PUT, Some(token), &path, &StatusUpdateRequest { status })
            .await?;
        log_admin_action("update_campaign_status", id, Some(status.as_str()));
        Ok(response)
    }

    pub async fn stats(&self, token: &str) -> Result<AdminStats> {
        let (users, campaigns, influencers) = tokio::try_join!(
            self.users(token),
            self.campaigns(token),
            self.influencers(token),
        )?;
        Ok(compute_stats(&users, &campaigns, &influencers))
    }

    pub async fn recent_activities(&self, token: &str) -> Result<Vec<Activity>> {
        let (campaigns, users) = tokio::try_join!(self.campaigns(token), self.users(token))?;
        Ok(merge_activities(&campaigns, &users))
    }

    /// Stats and activity feed from a single fetch of each collection
    pub async fn dashboard(&self, token: &str) -> Result<AdminDashboard> {
        let (users, campaigns, influencers) = tokio::try_join!(
            self.users(token),
            self.campaigns(token),
            self.influencers(token),
        )?;
        debug!(
            users = users.len(),
            campaigns = campaigns.len(),
            influencers = influencers.len(),
            "Fetched dashboard collections"
        );

        Ok(AdminDashboard {
            stats: compute_stats(&users, &campaigns, &influencers),
            activities: merge_activities(&campaigns, &users),
        })
    }

    async fn influencers(&self, token: &str) -> Result<Vec<Influencer>> {
        self.api.get_json(token, INFLUENCERS_PATH).await
    }
}

pub fn compute_stats(users: &[User], campaigns: &[Campaign], influencers: &[Influencer]) -> AdminStats {
    let count_status = |status: CampaignStatus| campaigns.iter().filter(|c| c.status == status).count();
    let completed = count_status(CampaignStatus::Completed);

    AdminStats {
        total_users: users.len(),
        total_campaigns: campaigns.len(),
        pending_campaigns: count_status(CampaignStatus::Pending),
        total_influencers: influencers.len(),
        success_rate: success_rate(completed, campaigns.len()),
    }
}

/// `round(100 * completed / total)` with halves rounded up; 0 when there is nothing to rate
pub fn success_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed as u128;
    let total = total as u128;
    ((200 * completed + total) / (2 * total)) as u32
}

/// Newest-first feed of campaign creations and user registrations, capped at five.
///
/// Entries without a timestamp go last; ties keep campaign-then-user input order.
pub fn merge_activities(campaigns: &[Campaign], users: &[User]) -> Vec<Activity> {
    let mut activities: Vec<Activity> = campaigns
        .iter()
        .map(|campaign| Activity {
            kind: ActivityKind::Campaign,
            id: campaign.id.clone(),
            title: format!("New campaign created: {}", campaign.title),
            user: campaign.creator_name().map(str::to_string),
            timestamp: campaign.created_at,
        })
        .chain(users.iter().map(|user| Activity {
            kind: ActivityKind::User,
            id: user.id.clone(),
            title: format!("New user registered: {}", user.name),
            user: Some(user.name.clone()),
            timestamp: user.created_at,
        }))
        .collect();

    activities.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    activities.truncate(ACTIVITY_FEED_LEN);
    activities
}
