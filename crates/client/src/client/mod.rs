//! Main Cloudflare API client and API methods.
//!
//! This module provides the primary [`CloudflareClient`]. Every public
//! method runs the matching endpoint under the client's timeout and wraps
//! any failure with the operation name.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `verify`: Credential verification
//! - `zones`: Zone listing and lookup
//! - `purge`: Cache purging
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retry/backoff (internal to [`crate::endpoints::send_request_with_retry`])
//!
//! # Invariants
//! - Every call is bounded by `timeout`, independent of the caller.
//! - Every error returned from a public method is a `ClientError::Context`.

pub mod builder;

mod purge;
mod verify;
mod zones;

use std::future::Future;
use std::time::Duration;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};

/// Cloudflare v4 API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use cfctl_client::{CloudflareClient, Credentials};
/// use secrecy::SecretString;
///
/// let client = CloudflareClient::builder()
///     .credentials(Credentials::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// let zones = client.list_zones().await?;
/// ```
#[derive(Debug)]
pub struct CloudflareClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: usize,
}

impl CloudflareClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CloudflareClientBuilder {
        builder::CloudflareClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the retry budget for transient failures.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Whether the client authenticates with a scoped API token.
    pub fn is_api_token_auth(&self) -> bool {
        self.credentials.is_api_token()
    }

    /// Run an endpoint call under the client timeout, adding operation context.
    async fn call<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let outcome = match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(self.timeout)),
        };
        outcome.map_err(|e| {
            tracing::debug!(operation, error = %e, "Cloudflare API call failed");
            e.context(operation)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn token() -> Credentials {
        Credentials::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_client_builder_defaults() {
        let client = CloudflareClient::builder()
            .credentials(token())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.cloudflare.com/client/v4");
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.max_retries(), 3);
        assert!(client.is_api_token_auth());
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_times_out_with_context() {
        let client = CloudflareClient::builder()
            .credentials(token())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let err = client
            .call("get zone", async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err.root(), ClientError::Timeout(_)));
        assert!(err.to_string().starts_with("get zone: Request timed out"));
    }
}
