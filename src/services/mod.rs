//! Services module
//!
//! This module contains the clients for each area of the marketplace API

pub mod http;
pub mod auth;
pub mod influencer;
pub mod campaign;
pub mod admin;
pub mod booking;
pub mod search;

// Re-export commonly used services
pub use http::ApiClient;
pub use auth::AuthService;
pub use influencer::InfluencerService;
pub use campaign::CampaignService;
pub use admin::{AdminService, compute_stats, merge_activities, success_rate};
pub use booking::{BookingService, BookingConfirmation};
pub use search::{InfluencerSearch, AgeFilter};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub auth_service: AuthService,
    pub influencer_service: InfluencerService,
    pub campaign_service: CampaignService,
    pub admin_service: AdminService,
    pub booking_service: BookingService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one HTTP client
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        Ok(Self::with_client(api))
    }

    pub fn with_client(api: ApiClient) -> Self {
        let campaign_service = CampaignService::new(api.clone());

        Self {
            auth_service: AuthService::new(api.clone()),
            influencer_service: InfluencerService::new(api.clone()),
            admin_service: AdminService::new(api.clone()),
            booking_service: BookingService::new(campaign_service.clone()),
            campaign_service,
            api,
        }
    }
}
