/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Response from POST /test_openai_key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestKeyResponse {
    pub success: bool,
    pub message: String,
}

/// Response from GET /get_nonce_to_sign/{address}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Response from POST /verify_signature
///
/// The backend reports rejection either through `error` or `message`
/// depending on which check failed, so both are optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VerifyResponse {
    /// Get the rejection text, preferring the dedicated error field
    pub fn rejection_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

/// Failure body shape shared by all endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiFailure {
    /// Get the user-facing message, whichever field the endpoint used
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
