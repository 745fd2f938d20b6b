/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::http::{GateError, Result};
use crate::types::ApiFailure;

/// Base URL of the backend during development
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the walletgate backend
#[derive(Debug, Clone)]
pub struct GateClient {
    http_client: Client,
    base_url: Url,
}

impl GateClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request builder for an endpoint path
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON body into `T`.
    ///
    /// Non-success statuses are mapped to [`GateError::Api`], preferring
    /// the body's `message`/`error` field over the canonical status text.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| {
                GateError::InvalidResponse(format!("Failed to decode response body: {e}"))
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "request failed");
            Err(GateError::api_error(status, failure_message(status, &body)))
        }
    }
}

/// Extract a user-facing message from a failure body, falling back to the
/// HTTP status text when the body carries none.
fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiFailure>(body)
        .ok()
        .and_then(ApiFailure::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_body_message() {
        let body = r#"{"message": "bad key"}"#;
        assert_eq!(failure_message(StatusCode::UNAUTHORIZED, body), "bad key");
    }

    #[test]
    fn test_failure_message_accepts_error_field() {
        let body = r#"{"error": "unknown address"}"#;
        assert_eq!(
            failure_message(StatusCode::NOT_FOUND, body),
            "unknown address"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_status_text() {
        assert_eq!(
            failure_message(StatusCode::UNAUTHORIZED, ""),
            "Unauthorized"
        );
        assert_eq!(
            failure_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "Bad Gateway"
        );
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let err = GateClient::with_config_and_base_url(ClientConfig::default(), "not a url")
            .unwrap_err();
        assert!(matches!(err, GateError::UrlParse(_)));
    }
}
