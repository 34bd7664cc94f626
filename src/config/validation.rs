//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{InfluenceHubError, Result};
use super::{Settings, SessionBackendKind};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref account) = settings.account {
        validate_account_config(account)?;
    }

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(InfluenceHubError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(InfluenceHubError::Config(
            format!("API base URL must be http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(InfluenceHubError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    match config.backend {
        SessionBackendKind::Memory => {}
        SessionBackendKind::File => {
            if config.file_path.as_deref().map_or(true, str::is_empty) {
                return Err(InfluenceHubError::Config(
                    "Session file path is required for the file backend".to_string()
                ));
            }
        }
        SessionBackendKind::Redis => {
            if config.redis_url.as_deref().map_or(true, str::is_empty) {
                return Err(InfluenceHubError::Config(
                    "Redis URL is required for the redis backend".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(InfluenceHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(InfluenceHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate stored account credentials
fn validate_account_config(config: &super::AccountConfig) -> Result<()> {
    if config.email.is_empty() || config.password.is_empty() {
        return Err(InfluenceHubError::Config(
            "Account email and password must both be set".to_string()
        ));
    }

    Ok(())
}
