//! Client builder for constructing [`CloudflareClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Applying the persisted API settings (timeout, retries)
//! - Normalizing the base URL (removing trailing slashes)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`CloudflareClient`] methods)
//! - Fetching secrets from the credential store (the caller supplies them)
//!
//! # Invariants
//! - `credentials` is required and must be provided before calling `build()`
//! - A zero timeout or retry count means the built-in default
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use cfctl_config::ApiSettings;
use cfctl_config::constants::{DEFAULT_API_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};

use crate::auth::Credentials;
use crate::client::CloudflareClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CloudflareClient`].
///
/// # Example
///
/// ```rust,ignore
/// let client = CloudflareClient::builder()
///     .credentials(credentials)
///     .from_settings(&config.api)
///     .build()?;
/// ```
pub struct CloudflareClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
    max_retries: usize,
}

impl Default for CloudflareClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl CloudflareClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API base URL (tests and proxies).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials used on every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the per-call timeout. Zero keeps the default of 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            timeout
        };
        self
    }

    /// Set the retry budget for transient failures. Zero keeps the default of 3.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = if retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            retries
        };
        self
    }

    /// Apply the persisted `api` settings section.
    pub fn from_settings(self, settings: &ApiSettings) -> Self {
        self.timeout(settings.timeout_duration())
            .max_retries(settings.effective_retries())
    }

    fn normalize_base_url(url: &str) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`CloudflareClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if no credentials were provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<CloudflareClient> {
        let credentials = self.credentials.ok_or_else(|| {
            ClientError::AuthFailed(
                "either API token or API key with email must be provided".to_string(),
            )
        })?;

        let base_url = Self::normalize_base_url(self.base_url.trim());
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("cfctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(CloudflareClient {
            http,
            base_url,
            credentials,
            timeout: self.timeout,
            max_retries: self.max_retries,
        })
    }
}
