//! Mock marketplace backend for testing
//!
//! This module provides a mock HTTP server that simulates the InfluenceHub
//! REST API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use InfluenceHub::{
    config::{SessionBackendKind, Settings},
    services::{ApiClient, ServiceFactory},
    session::{SessionManager, SessionStorage},
};

/// Mock backend server for testing
pub struct MockBackend {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body: None,
        }
    }
}

impl MockResponseConfig {
    pub fn ok(body: Value) -> Self {
        Self {
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            delay_ms: None,
            body: Some(json!({ "message": message })),
        }
    }

    fn into_response(self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);
        if let Some(body) = self.body {
            response = response.set_body_json(body);
        }
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }
}

impl MockBackend {
    /// Create a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// Settings pointing at this server with an in-memory session
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.base_url.clone();
        settings.session.backend = SessionBackendKind::Memory;
        settings
    }

    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::new(&self.settings()).expect("mock settings are valid")
    }

    pub fn client_with_timeout(&self, seconds: u64) -> ApiClient {
        let mut settings = self.settings();
        settings.api.timeout_seconds = Some(seconds);
        ApiClient::new(&settings.api).expect("mock settings are valid")
    }

    pub fn session_manager(&self, storage: SessionStorage) -> SessionManager {
        SessionManager::new(storage, self.services().auth_service)
    }

    /// Mount an authenticated endpoint expecting `Bearer <token>`
    pub async fn mock_authed(&self, verb: &str, route: &str, token: &str, config: MockResponseConfig) {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(config.into_response())
            .mount(&self.server)
            .await;
    }

    /// Mount an endpoint regardless of headers
    pub async fn mock_any(&self, verb: &str, route: &str, config: MockResponseConfig) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(config.into_response())
            .mount(&self.server)
            .await;
    }

    /// Setup mock for the login endpoint
    pub async fn mock_login(&self, token: &str, user: Value) {
        self.mock_any(
            "POST",
            "/api/auth/login",
            MockResponseConfig::ok(json!({ "token": token, "user": user })),
        )
        .await;
    }

    /// Setup mock for the register endpoint
    pub async fn mock_register(&self) {
        self.mock_any(
            "POST",
            "/api/auth/register",
            MockResponseConfig {
                status: 201,
                delay_ms: None,
                body: Some(json!({ "message": "User registered successfully" })),
            },
        )
        .await;
    }

    /// Requests received so far
    pub async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
