//! Booking flow
//!
//! A brand books an influencer onto one of its accepted campaigns. The
//! backend has no booking endpoint, so confirmation happens client-side.

use serde::Serialize;
use tracing::info;

use super::campaign::CampaignService;
use crate::models::campaign::Campaign;
use crate::models::influencer::Influencer;
use crate::utils::errors::{InfluenceHubError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub influencer_id: String,
    pub campaign_id: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct BookingService {
    campaigns: CampaignService,
}

impl BookingService {
    pub fn new(campaigns: CampaignService) -> Self {
        Self { campaigns }
    }

    /// The caller's campaigns that influencers can be booked onto
    pub async fn eligible_campaigns(&self, token: &str) -> Result<Vec<Campaign>> {
        let mine = self.campaigns.mine(token).await?;
        let eligible: Vec<Campaign> = mine.into_iter().filter(|c| c.status.is_bookable()).collect();
        info!(count = eligible.len(), "Loaded bookable campaigns");
        Ok(eligible)
    }

    pub fn confirm(&self, influencer: &Influencer, campaign: Option<&Campaign>) -> Result<BookingConfirmation> {
        confirm_booking(influencer, campaign)
    }
}

pub fn confirm_booking(influencer: &Influencer, campaign: Option<&Campaign>) -> Result<BookingConfirmation> {
    let campaign = campaign.ok_or_else(|| {
        InfluenceHubError::Validation("Please select a campaign first".to_string())
    })?;

    if !campaign.status.is_bookable() {
        return Err(InfluenceHubError::Validation(format!(
            "Campaign \"{}\" is {} and cannot take bookings",
            campaign.title, campaign.status
        )));
    }

    info!(influencer_id = %influencer.id, campaign_id = %campaign.id, "Booking confirmed");
    Ok(BookingConfirmation {
        influencer_id: influencer.id.clone(),
        campaign_id: campaign.id.clone(),
        message: format!(
            "You have successfully booked {} for the campaign \"{}\"",
            influencer.name, campaign.title
        ),
    })
}
