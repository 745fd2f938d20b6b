/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for walletgate-adapter tests

use walletgate_adapter::{ClientConfig, GateClient};
use wiremock::MockServer;

// Not every test binary touches every fixture.
#[allow(dead_code)]
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
#[allow(dead_code)]
pub const TEST_NONCE: &str = "nonce-8c2f41";
#[allow(dead_code)]
pub const TEST_SIGNATURE: &str = "0xdeadbeefsignature";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the mock server
pub fn client_for(server: &MockServer) -> GateClient {
    GateClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}
