/*
[INPUT]:  Wallet address, nonce, and signature strings
[OUTPUT]: Server-issued nonces and signature verification verdicts
[POS]:    HTTP layer - wallet login endpoints
[UPDATE]: When auth endpoints or request shapes change
*/

use reqwest::Method;

use crate::http::{GateClient, GateError, Result};
use crate::types::{NonceResponse, VerifyRequest, VerifyResponse};

impl GateClient {
    /// Fetch a single-use nonce for the given wallet address
    ///
    /// GET /get_nonce_to_sign/{address}
    pub async fn get_nonce_to_sign(&self, address: &str) -> Result<String> {
        let endpoint = format!("/get_nonce_to_sign/{address}");
        let builder = self.request(Method::GET, &endpoint)?;
        let response: NonceResponse = self.send_json(builder).await?;

        if response.nonce.is_empty() {
            return Err(GateError::InvalidResponse(
                "Server returned an empty nonce".to_string(),
            ));
        }

        Ok(response.nonce)
    }

    /// Submit a signed nonce for server-side verification
    ///
    /// POST /verify_signature
    pub async fn verify_signature(
        &self,
        signature: &str,
        nonce: &str,
        address: &str,
    ) -> Result<VerifyResponse> {
        let body = VerifyRequest {
            signed_message: signature.to_string(),
            original_nonce: nonce.to_string(),
            wallet_address: address.to_string(),
        };

        let builder = self.request(Method::POST, "/verify_signature")?;
        let builder = builder.json(&body);
        self.send_json(builder).await
    }
}
