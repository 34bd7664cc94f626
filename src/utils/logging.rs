//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the InfluenceHub client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};
use crate::config::LoggingConfig;
use crate::utils::errors::{ApiError, InfluenceHubError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| InfluenceHubError::Config(format!("Invalid log filter: {}", e)))?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if config.json {
        layers.push(tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed());
    } else {
        layers.push(tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed());
    }

    let guard = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "influencehub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| InfluenceHubError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed backend request
pub fn log_api_request(request_id: &str, method: &str, path: &str, status: u16, duration_ms: u64) {
    debug!(
        request_id = request_id,
        method = method,
        path = path,
        status = status,
        duration_ms = duration_ms,
        "API request completed"
    );
}

/// Log a classified API failure
pub fn log_api_error(request_id: &str, method: &str, path: &str, error: &ApiError) {
    match error {
        ApiError::Server { .. } | ApiError::Network(_) => error!(
            request_id = request_id,
            method = method,
            path = path,
            status = error.status(),
            error = %error,
            server_message = error.server_message(),
            "API error occurred"
        ),
        _ => warn!(
            request_id = request_id,
            method = method,
            path = path,
            status = error.status(),
            error = %error,
            server_message = error.server_message(),
            "API request rejected"
        ),
    }
}

/// Log session lifecycle changes
pub fn log_session_event(event: &str, user_id: Option<&str>, role: Option<&str>) {
    info!(
        event = event,
        user_id = user_id,
        role = role,
        "Session event"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: &str, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}
