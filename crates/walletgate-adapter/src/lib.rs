/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public walletgate adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod settings;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    LocalWalletProvider,
    MockWalletProvider,
    SessionState,
    SignInReceipt,
    WalletProvider,
    WalletSession,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    GateClient,
    GateError,
    Result,
};

// Re-export the key tester handler
pub use settings::KeyTester;

// Re-export all types
pub use types::*;
