//! Authentication service
//!
//! Login, registration and profile lookups against `/api/auth`.

use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info};

use super::http::ApiClient;
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::utils::errors::{InfluenceHubError, Result};
use crate::utils::helpers::is_present;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/auth/profile";

/// The profile endpoint may wrap the user or return it bare
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileResponse {
    Wrapped { user: User },
    Bare(User),
}

#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a bearer token and the user profile
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        if !is_present(email) || !is_present(password) {
            return Err(InfluenceHubError::Validation(
                "Email and password are required".to_string(),
            ));
        }

        debug!("Logging in");
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .api
            .send_json_body(Method::POST, None, LOGIN_PATH, &request)
            .await?;

        info!(user_id = %response.user.id, role = ?response.user.role, "Login succeeded");
        Ok(response)
    }

    /// Create an account. The backend does not return a token here; log in afterwards.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<serde_json::Value> {
        if !is_present(name) || !is_present(email) || !is_present(password) {
            return Err(InfluenceHubError::Validation(
                "All fields are required!".to_string(),
            ));
        }

        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: serde_json::Value = self
            .api
            .send_json_body(Method::POST, None, REGISTER_PATH, &request)
            .await?;

        info!("Registration accepted");
        Ok(response)
    }

    /// Fetch the profile of the token's owner
    pub async fn profile(&self, token: &str) -> Result<User> {
        let response: ProfileResponse = self.api.get_json(token, PROFILE_PATH).await?;
        Ok(match response {
            ProfileResponse::Wrapped { user } => user,
            ProfileResponse::Bare(user) => user,
        })
    }
}
