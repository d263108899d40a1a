//! Common test utilities for integration tests.
//!
//! Provides shared helpers and re-exports commonly used types for testing
//! the audit client against a mocked audit service.

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use audit_client::{
    AuditClient, Credentials, ErrorKind, ScopeSelector, TimeRange, error::ClientError,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test token used by [`client_for`]; mocks can match the resulting
/// Authorization header.
pub const TEST_TOKEN: &str = "test-token";

/// Build a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> AuditClient {
    AuditClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::from_token(TEST_TOKEN))
        .build()
        .expect("client should build against the mock server")
}
