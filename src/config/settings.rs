//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

/// Development backend the mobile client shipped against
pub const DEFAULT_BASE_URL: &str = "http://192.168.6.29:5000";

pub const DEFAULT_SESSION_FILE: &str = ".influencehub/session.json";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub account: Option<AccountConfig>,
}

/// Marketplace backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// No timeout is applied when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Where the session token and user profile are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackendKind {
    Memory,
    File,
    Redis,
}

/// Local session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub backend: SessionBackendKind,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub redis_url: Option<String>,
    pub redis_prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub json: bool,
}

/// Credentials used by the `login` command
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load settings layered over the defaults from `file_stem` and the environment
    pub fn load_from(file_stem: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.user_agent", defaults.api.user_agent)?
            .set_default("session.backend", "file")?
            .set_default("session.file_path", DEFAULT_SESSION_FILE)?
            .set_default("session.redis_prefix", defaults.session.redis_prefix)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("INFLUENCEHUB")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::InfluenceHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_seconds: None,
                user_agent: format!("InfluenceHub-Client/{}", env!("CARGO_PKG_VERSION")),
            },
            session: SessionConfig {
                backend: SessionBackendKind::File,
                file_path: Some(DEFAULT_SESSION_FILE.to_string()),
                redis_url: None,
                redis_prefix: "influencehub:".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
            account: None,
        }
    }
}
