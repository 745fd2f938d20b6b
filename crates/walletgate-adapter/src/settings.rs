/*
[INPUT]:  Raw API key input and server validation verdicts
[OUTPUT]: Display-ready notices in the result slot
[POS]:    Settings layer - API key tester handler
[UPDATE]: When the validation endpoint or display contract changes
*/

use std::sync::RwLock;

use crate::http::{GateClient, GateError, Result};
use crate::types::{Notice, TestKeyResponse};

const EMPTY_KEY_TEXT: &str = "Please enter an API key.";
const GENERIC_ERROR_TEXT: &str = "An unexpected error occurred.";

/// Handler for the API key tester flow
///
/// Holds the result slot, the analogue of the result display element.
/// Every submission clears the prior notice before running.
pub struct KeyTester {
    client: GateClient,
    result: RwLock<Option<Notice>>,
}

impl KeyTester {
    /// Create a tester over the given client
    pub fn new(client: GateClient) -> Self {
        Self {
            client,
            result: RwLock::new(None),
        }
    }

    /// Get the most recent notice, if any
    pub fn last_notice(&self) -> Option<Notice> {
        self.result.read().unwrap().clone()
    }

    /// Submit a raw key candidate and produce a display notice
    ///
    /// The input is trimmed; an empty input never issues a network call.
    /// One attempt per submission, no retries.
    pub async fn submit(&self, raw_key: &str) -> Notice {
        *self.result.write().unwrap() = None;

        let notice = match self.validate_key(raw_key.trim()).await {
            Ok(verdict) if verdict.success => Notice::success(verdict.message),
            Ok(verdict) => Notice::error(verdict.message),
            Err(GateError::EmptyApiKey) => Notice::error(EMPTY_KEY_TEXT),
            Err(GateError::Api { message, .. }) => Notice::error(format!("Error: {message}")),
            Err(err) => {
                tracing::warn!(error = %err, "key test failed");
                Notice::error(GENERIC_ERROR_TEXT)
            }
        };

        *self.result.write().unwrap() = Some(notice.clone());
        notice
    }

    async fn validate_key(&self, api_key: &str) -> Result<TestKeyResponse> {
        if api_key.is_empty() {
            return Err(GateError::EmptyApiKey);
        }
        self.client.test_openai_key(api_key).await
    }
}
