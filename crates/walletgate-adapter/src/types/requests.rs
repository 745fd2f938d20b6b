/*
[INPUT]:  Flow parameters (API key, signature, nonce, address)
[OUTPUT]: Serializable request bodies
[POS]:    Data layer - request definitions
[UPDATE]: When request bodies change
*/

use serde::{Deserialize, Serialize};

/// Body for POST /test_openai_key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestKeyRequest {
    pub api_key: String,
}

/// Body for POST /verify_signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub signed_message: String,
    pub original_nonce: String,
    pub wallet_address: String,
}
