/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for lnurl-it-client tests

use lnurl_it_client::{ClientConfig, LnurlClient};
use wiremock::MockServer;

/// Secret used across tests, in canonical UUID form
pub const TEST_SECRET: &str = "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11";

/// Withdrawal identifier used across tests, in canonical UUID form
pub const TEST_WITHDRAWAL_ID: &str = "b1eebc99-9c0b-4ef8-bb6d-6bb9bd380a11";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at the given mock server
pub fn mock_client(server: &MockServer) -> LnurlClient {
    LnurlClient::with_config_and_base_url(TEST_SECRET, ClientConfig::default(), &server.uri())
        .expect("client init")
}
