//! Session lifecycle
//!
//! Login and signup persist the bearer token and user profile; logout clears
//! the store. Every authenticated call reads the token from here.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::storage::SessionStorage;
use crate::models::user::User;
use crate::services::auth::AuthService;
use crate::utils::errors::{InfluenceHubError, Result, SessionError};
use crate::utils::helpers::is_present;
use crate::utils::logging::log_session_event;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

#[derive(Clone, Debug)]
pub struct SessionManager {
    storage: SessionStorage,
    auth: AuthService,
}

impl SessionManager {
    pub fn new(storage: SessionStorage, auth: AuthService) -> Self {
        Self { storage, auth }
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self.auth.login(email, password).await?;
        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.persist(&session).await?;
        log_session_event("login", Some(&session.user.id), Some(role_name(&session)));
        Ok(session)
    }

    /// Register, then log in with the same credentials
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        if !is_present(name) || !is_present(email) || !is_present(password) {
            return Err(InfluenceHubError::Validation(
                "All fields are required!".to_string(),
            ));
        }

        self.auth.register(name, email, password).await?;
        let response = self.auth.login(email, password).await?;
        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.persist(&session).await?;
        log_session_event("signup", Some(&session.user.id), Some(role_name(&session)));
        Ok(session)
    }

    /// The stored session, if a token and a readable user are both present
    pub async fn current(&self) -> Result<Option<Session>> {
        let token = match self.storage.get(TOKEN_KEY).await? {
            Some(token) if is_present(&token) => token,
            _ => return Ok(None),
        };
        let Some(user_json) = self.storage.get(USER_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => Ok(Some(Session { token, user })),
            Err(e) => {
                warn!(error = %e, "Stored user profile is unreadable");
                Ok(None)
            }
        }
    }

    /// Bearer token for authenticated calls
    pub async fn token(&self) -> Result<String> {
        match self.storage.get(TOKEN_KEY).await? {
            Some(token) if is_present(&token) => Ok(token),
            _ => Err(SessionError::NotAuthenticated.into()),
        }
    }

    /// The stored session, failing when there is none
    pub async fn require(&self) -> Result<Session> {
        self.current()
            .await?
            .ok_or_else(|| SessionError::NotAuthenticated.into())
    }

    pub async fn logout(&self) -> Result<()> {
        self.storage.clear().await?;
        log_session_event("logout", None, None);
        Ok(())
    }

    /// The token is written last; a session is only usable once both keys exist
    async fn persist(&self, session: &Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.remove(TOKEN_KEY).await?;
        self.storage.set(USER_KEY, &user_json).await?;
        if let Err(e) = self.storage.set(TOKEN_KEY, &session.token).await {
            warn!(error = %e, "Failed to store session token");
            let _ = self.storage.remove(USER_KEY).await;
            return Err(e);
        }
        debug!(user_id = %session.user.id, "Session persisted");
        Ok(())
    }
}

fn role_name(session: &Session) -> &'static str {
    if session.is_admin() {
        "admin"
    } else {
        "standard"
    }
}
