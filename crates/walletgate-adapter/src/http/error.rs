/*
[INPUT]:  Error sources (HTTP, API, wallet provider, local validation)
[OUTPUT]: Structured error types with user-facing messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the walletgate adapter
#[derive(Error, Debug)]
pub enum GateError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API answered with a success status but rejected the request
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// No wallet provider was injected into the session
    #[error("No wallet provider available, please install a wallet to use this feature")]
    ProviderUnavailable,

    /// Wallet provider failed or the user rejected the operation
    #[error("Wallet error: {message}")]
    Wallet { message: String },

    /// Sign-in was attempted without a connected account
    #[error("No wallet account is connected")]
    NotConnected,

    /// API key submission was empty after trimming
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// Another attempt is already in flight on this session
    #[error("Another attempt is already in progress")]
    Busy,

    /// Server answered with a success status but an unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GateError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        GateError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Check if the error was raised locally, before any network call
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            GateError::EmptyApiKey
                | GateError::NotConnected
                | GateError::Busy
                | GateError::ProviderUnavailable
        )
    }

    /// Get the server-supplied message, if this error carries one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GateError::Api { message, .. } | GateError::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for walletgate operations
pub type Result<T> = std::result::Result<T, GateError>;
