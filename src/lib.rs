//! InfluenceHub client
//!
//! Client library for the InfluenceHub influencer-marketing marketplace.
//! Brands browse and search influencers, create and track campaigns and book
//! influencers; administrators moderate campaigns and users and follow a
//! dashboard of platform statistics.

#![allow(non_snake_case)]

pub mod config;
pub mod services;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{InfluenceHubError, ApiError, Result};

// Re-export main components for easy access
pub use services::{ServiceFactory, ApiClient, InfluencerSearch};
pub use session::{Session, SessionManager, SessionStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
