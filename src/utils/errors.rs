//! Error handling for InfluenceHub
//!
//! This module defines the main error types used throughout the client
//! and the classification of failed API calls.

use reqwest::StatusCode;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access. Please login again.";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const VALIDATION_ERROR_MESSAGE: &str = "Please check your input and try again.";

/// Main error type for InfluenceHub
#[derive(Error, Debug)]
pub enum InfluenceHubError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A failed call to the marketplace backend, classified by HTTP status.
///
/// Every variant keeps the `message` field of the server's error body when
/// one was returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized access. Please login again.")]
    Unauthorized { message: Option<String> },

    #[error("Resource not found.")]
    NotFound { message: Option<String> },

    #[error("Server error. Please try again later.")]
    Server { status: u16, message: Option<String> },

    #[error("Network error. Please check your internet connection.")]
    Network(String),
}

/// Local session store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No authentication token found")]
    NotAuthenticated,
}

/// Result type alias for InfluenceHub operations
pub type Result<T> = std::result::Result<T, InfluenceHubError>;

impl ApiError {
    /// Classify a non-success response
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { message },
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            other => ApiError::Server {
                status: other.as_u16(),
                message,
            },
        }
    }

    /// Message sent back by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::NotFound { message }
            | ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }

    /// HTTP status of the failed response; `None` when nothing came back
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// Text for a single user-facing alert
    pub fn user_message(&self) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

impl InfluenceHubError {
    /// Text for a single user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            InfluenceHubError::Api(e) => e.user_message(),
            InfluenceHubError::Session(e) => e.to_string(),
            InfluenceHubError::Validation(msg) if msg.trim().is_empty() => {
                VALIDATION_ERROR_MESSAGE.to_string()
            }
            InfluenceHubError::Validation(msg) => msg.clone(),
            InfluenceHubError::Http(e) if e.is_timeout() || e.is_connect() => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
            InfluenceHubError::Serialization(_) => SERVER_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the caller should re-authenticate
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            InfluenceHubError::Api(ApiError::Unauthorized { .. })
                | InfluenceHubError::Session(SessionError::NotAuthenticated)
        )
    }

    /// Check if the error is recoverable by trying again later
    pub fn is_recoverable(&self) -> bool {
        match self {
            InfluenceHubError::Api(ApiError::Network(_)) => true,
            InfluenceHubError::Api(ApiError::Server { .. }) => true,
            InfluenceHubError::Api(_) => false,
            InfluenceHubError::Session(_) => false,
            InfluenceHubError::Config(_) => false,
            InfluenceHubError::Validation(_) => false,
            InfluenceHubError::Redis(_) => true,
            InfluenceHubError::Http(_) => true,
            InfluenceHubError::Serialization(_) => false,
            InfluenceHubError::Io(_) => true,
            InfluenceHubError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            InfluenceHubError::Config(_) => ErrorSeverity::Critical,
            InfluenceHubError::Api(ApiError::Unauthorized { .. }) => ErrorSeverity::Warning,
            InfluenceHubError::Api(ApiError::NotFound { .. }) => ErrorSeverity::Warning,
            InfluenceHubError::Session(_) => ErrorSeverity::Warning,
            InfluenceHubError::Validation(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, None),
            ApiError::Unauthorized { message: None }
        );
        assert_eq!(
            ApiError::from_status(StatusCode::NOT_FOUND, None),
            ApiError::NotFound { message: None }
        );
        assert_eq!(
            ApiError::from_status(StatusCode::BAD_REQUEST, Some("bad".into())),
            ApiError::Server { status: 400, message: Some("bad".into()) }
        );
        assert_eq!(
            ApiError::from_status(StatusCode::FORBIDDEN, None).status(),
            Some(403)
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::Unauthorized { message: None }.to_string(), UNAUTHORIZED_MESSAGE);
        assert_eq!(ApiError::NotFound { message: None }.to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(
            ApiError::Server { status: 500, message: None }.to_string(),
            SERVER_ERROR_MESSAGE
        );
        assert_eq!(ApiError::Network("reset".into()).to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server { status: 400, message: Some("Email already used".into()) };
        assert_eq!(err.user_message(), "Email already used");

        let blank = ApiError::NotFound { message: Some("  ".into()) };
        assert_eq!(blank.user_message(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_requires_login() {
        let err: InfluenceHubError = ApiError::Unauthorized { message: None }.into();
        assert!(err.requires_login());
        assert!(!err.is_recoverable());

        let err: InfluenceHubError = SessionError::NotAuthenticated.into();
        assert!(err.requires_login());
        assert_eq!(err.user_message(), "No authentication token found");

        let err: InfluenceHubError = ApiError::Network("timeout".into()).into();
        assert!(!err.requires_login());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_session_error_is_login_prompt() {
        let err: InfluenceHubError = SessionError::NotAuthenticated.into();
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Session error: No authentication token found");
    }

    #[test]
    fn test_blank_validation_uses_generic_message() {
        let err = InfluenceHubError::Validation("  ".into());
        assert_eq!(err.user_message(), VALIDATION_ERROR_MESSAGE);
    }

    #[test]
    fn test_severity() {
        assert_eq!(InfluenceHubError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert_eq!(InfluenceHubError::Validation("x".into()).severity(), ErrorSeverity::Info);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
