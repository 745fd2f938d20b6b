/*
[INPUT]:  Account and signing requests from the login flow
[OUTPUT]: Wallet addresses and message signatures
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new provider types or changing the capability surface
*/

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::http::{GateError, Result};

/// Trait for an injected wallet capability
///
/// Mirrors the browser-injected provider surface: an account request and a
/// personal-message signing operation. Both may suspend pending user
/// approval and both may fail or be rejected.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the list of accounts, first entry is the active one
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Sign a message with the given account and return the signature
    async fn sign_message(&self, message: &str, address: &str) -> Result<String>;
}

/// Scripted wallet provider for testing
///
/// Records call counts and the last signed message so tests can assert
/// on flow ordering.
#[derive(Debug, Default)]
pub struct MockWalletProvider {
    accounts: Vec<String>,
    signature: String,
    accounts_failure: Option<String>,
    sign_failure: Option<String>,
    account_requests: AtomicUsize,
    sign_requests: AtomicUsize,
    last_signed: RwLock<Option<(String, String)>>,
}

impl MockWalletProvider {
    /// Create a provider exposing one account with a fixed signature
    pub fn new(address: &str, signature: &str) -> Self {
        Self {
            accounts: vec![address.to_string()],
            signature: signature.to_string(),
            ..Default::default()
        }
    }

    /// Create a provider that returns no accounts
    pub fn without_accounts() -> Self {
        Self::default()
    }

    /// Make the account request fail with the given message
    pub fn failing_accounts(message: &str) -> Self {
        Self {
            accounts_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Make the signing request fail with the given message
    pub fn with_sign_failure(mut self, message: &str) -> Self {
        self.sign_failure = Some(message.to_string());
        self
    }

    /// Number of account requests seen so far
    pub fn account_requests(&self) -> usize {
        self.account_requests.load(Ordering::SeqCst)
    }

    /// Number of signing requests seen so far
    pub fn sign_requests(&self) -> usize {
        self.sign_requests.load(Ordering::SeqCst)
    }

    /// The (message, address) pair of the most recent signing request
    pub fn last_signed(&self) -> Option<(String, String)> {
        self.last_signed.read().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.account_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.accounts_failure {
            return Err(GateError::Wallet {
                message: message.clone(),
            });
        }
        Ok(self.accounts.clone())
    }

    async fn sign_message(&self, message: &str, address: &str) -> Result<String> {
        self.sign_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.sign_failure {
            return Err(GateError::Wallet {
                message: failure.clone(),
            });
        }
        *self.last_signed.write().unwrap() = Some((message.to_string(), address.to_string()));
        Ok(self.signature.clone())
    }
}
