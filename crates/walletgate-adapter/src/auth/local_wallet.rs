/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Derived wallet address and personal-sign signatures
[POS]:    Auth layer - local key wallet implementation
[UPDATE]: When signing logic or address formatting changes
*/

use std::str::FromStr;

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletProvider;
use crate::http::{GateError, Result};

/// Wallet provider backed by a local EVM private key
///
/// Stands in for a browser-injected wallet in headless use: exposes the
/// single derived account and signs with EIP-191 personal-sign semantics,
/// matching what `personal_sign` produces.
#[derive(Debug)]
pub struct LocalWalletProvider {
    signer: PrivateKeySigner,
    address: String,
}

impl LocalWalletProvider {
    /// Create a provider from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer = PrivateKeySigner::from_str(private_key_hex)
            .map_err(|e| GateError::Config(format!("Invalid EVM private key: {e}")))?;

        let address = signer.address().to_checksum(None);

        Ok(Self { signer, address })
    }

    /// Get the checksummed address derived from the key
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl WalletProvider for LocalWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        Ok(vec![self.address.clone()])
    }

    async fn sign_message(&self, message: &str, address: &str) -> Result<String> {
        if !address.eq_ignore_ascii_case(&self.address) {
            return Err(GateError::Wallet {
                message: format!("No key held for address {address}"),
            });
        }

        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| GateError::Wallet {
                message: format!("Failed to sign message: {e}"),
            })?;

        // alloy's Signature as_bytes() returns [r, s, v]
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
