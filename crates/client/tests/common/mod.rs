//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Cloudflare client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::PathBuf;
use std::time::Duration;

#[allow(unused_imports)]
pub use cfctl_client::{ClientError, CloudflareClient, Credentials, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// A syntactically valid 40-character API token.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "0123456789abcdefghij0123456789abcdefghij";

/// Load a JSON fixture relative to `fixtures/`.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> serde_json::Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {e}", path.display()))
}

/// Bearer token credentials for tests.
#[allow(dead_code)]
pub fn token_credentials() -> Credentials {
    Credentials::ApiToken {
        token: SecretString::new(TEST_TOKEN.to_string().into()),
    }
}

/// Global API key credentials for tests.
#[allow(dead_code)]
pub fn key_credentials() -> Credentials {
    Credentials::ApiKey {
        email: "ops@example.com".to_string(),
        key: SecretString::new("0123456789abcdef0123456789abcdef01".to_string().into()),
    }
}

/// Client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, credentials: Credentials) -> CloudflareClient {
    CloudflareClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .timeout(Duration::from_secs(10))
        .build()
        .expect("client should build")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Assert that a task has not completed after yielding to the scheduler.
#[allow(dead_code)]
pub async fn assert_pending<T>(handle: &tokio::task::JoinHandle<T>, context: &str) {
    tokio::task::yield_now().await;
    assert!(!handle.is_finished(), "Expected pending task: {}", context);
}
