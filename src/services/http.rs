//! HTTP client for the marketplace backend
//!
//! Every service goes through [`ApiClient`], which attaches the bearer token,
//! sends exactly one request, and classifies failures into [`ApiError`].
//! There is no retry or backoff; a failure surfaces to the caller at once.

use std::time::{Duration, Instant};

use reqwest::{multipart::Form, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, InfluenceHubError, Result};
use crate::utils::helpers::{generate_request_id, media_url};
use crate::utils::logging::{log_api_error, log_api_request};

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared HTTP client; clones share one connection pool
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(InfluenceHubError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server-relative media path
    pub fn media_url(&self, path: &str) -> String {
        media_url(&self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, path, Some(token));
        self.send_json(Method::GET, path, builder).await
    }

    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.request(Method::GET, path, Some(token)).query(query);
        self.send_json(Method::GET, path, builder).await
    }

    /// JSON body request; `token` is `None` for the unauthenticated auth endpoints
    pub async fn send_json_body<B, T>(
        &self,
        method: Method,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path, token).json(body);
        self.send_json(method, path, builder).await
    }

    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        token: &str,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let builder = self.request(method.clone(), path, Some(token)).multipart(form);
        self.send_json(method, path, builder).await
    }

    /// Issue a request whose response body is not needed
    pub async fn send_discarding_body(&self, method: Method, token: &str, path: &str) -> Result<()> {
        let builder = self.request(method.clone(), path, Some(token));
        self.execute(&method, path, builder).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(&method, path, builder).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };

        serde_json::from_str(body).map_err(|e| {
            debug!(method = %method, path = path, error = %e, "Failed to decode response body");
            InfluenceHubError::Serialization(e)
        })
    }

    /// Send the request and turn anything but a 2xx into a classified error
    async fn execute(&self, method: &Method, path: &str, builder: RequestBuilder) -> Result<Response> {
        let request_id = generate_request_id();
        let started = Instant::now();

        let response = match builder.header(REQUEST_ID_HEADER, request_id.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ApiError::Network(e.to_string());
                log_api_error(&request_id, method.as_str(), path, &error);
                return Err(error.into());
            }
        };

        let status = response.status();
        log_api_request(
            &request_id,
            method.as_str(),
            path,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        let error = ApiError::from_status(status, message);
        log_api_error(&request_id, method.as_str(), path, &error);
        Err(error.into())
    }
}

/// Percent-encode a resource id for use as one path segment
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_base_url_normalized() {
        let mut config = Settings::default().api;
        config.base_url = "http://localhost:5000/".to_string();
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.media_url("uploads/x.jpg"), "http://localhost:5000/uploads/x.jpg");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = Settings::default().api;
        config.base_url = "::nope::".to_string();
        assert!(matches!(ApiClient::new(&config), Err(InfluenceHubError::UrlParse(_))));
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("65f1c2"), "65f1c2");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
