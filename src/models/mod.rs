//! Data models module
//!
//! This module contains the wire types exchanged with the marketplace backend

pub mod user;
pub mod influencer;
pub mod campaign;
pub mod admin;
pub mod media;
mod lenient;

// Re-export commonly used models
pub use user::{User, Role, LoginRequest, RegisterRequest, AuthResponse};
pub use influencer::{Influencer, InfluencerForm, SocialLinks};
pub use campaign::{Campaign, CampaignStatus, CampaignStats, CampaignForm, CreatorRef, CreatorSummary, StatusUpdateRequest};
pub use admin::{AdminStats, Activity, ActivityKind, AdminDashboard};
pub use media::MediaAttachment;
