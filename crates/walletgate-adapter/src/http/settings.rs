/*
[INPUT]:  API key candidate strings
[OUTPUT]: Server verdict on key validity
[POS]:    HTTP layer - settings endpoints
[UPDATE]: When adding new settings endpoints or changing request shape
*/

use reqwest::Method;

use crate::http::{GateClient, Result};
use crate::types::{TestKeyRequest, TestKeyResponse};

impl GateClient {
    /// Submit an API key candidate for server-side validation
    ///
    /// POST /test_openai_key
    pub async fn test_openai_key(&self, api_key: &str) -> Result<TestKeyResponse> {
        let body = TestKeyRequest {
            api_key: api_key.to_string(),
        };

        let builder = self.request(Method::POST, "/test_openai_key")?;
        let builder = builder.json(&body);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, GateClient, GateError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_test_openai_key_posts_single_field_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test_openai_key"))
            .and(body_json(serde_json::json!({"api_key": "sk-test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Key is valid",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            GateClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let response = client.test_openai_key("sk-test").await.unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Key is valid");
    }

    #[tokio::test]
    async fn test_test_openai_key_surfaces_body_message_on_failure_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/test_openai_key"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "message": "bad key",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            GateClient::with_config_and_base_url(ClientConfig::default(), &server.uri()).unwrap();
        let err = client.test_openai_key("sk-bad").await.unwrap_err();

        match err {
            GateError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
