//! Error types for the Cloudflare client.

use std::time::Duration;

use cfctl_config::ValidationError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Cloudflare error code returned when the token's IP filter rejects the caller.
pub const CODE_IP_RESTRICTED: i64 = 9109;

/// Cloudflare error codes that signal malformed or missing auth headers.
pub const AUTH_HEADER_CODES: [i64; 3] = [9103, 6003, 6111];

/// Errors that can occur during Cloudflare client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client could not be configured with the given credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Cloudflare that matched no known signature.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
        codes: Vec<i64>,
    },

    /// The token is restricted to client IPs that exclude this machine.
    #[error(
        "request blocked by IP restriction: your API token only allows specific client IP addresses. Add this machine's IP to the token's IP filter ({0})"
    )]
    IpRestricted(String),

    /// Credentials were rejected.
    #[error("unauthorized: the API token or key is invalid or expired. Check the credential and try again ({0})")]
    Unauthorized(String),

    /// Credentials are valid but lack permission for the operation.
    #[error("forbidden: the credential lacks the permission required for this operation. Check the token's permissions ({0})")]
    Forbidden(String),

    /// The token exists but is not usable.
    #[error("API token is not active (status: {0})")]
    TokenNotActive(String),

    /// Invalid response format from Cloudflare.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A purge request selected no mode, or its selected list was empty.
    #[error("no purge parameters provided")]
    NoPurgeParameters,

    /// A purge request failed local validation.
    #[error(transparent)]
    InvalidPurge(#[from] ValidationError),

    /// An error annotated with the operation that produced it.
    #[error("{operation}: {source}")]
    Context {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap this error with the name of the operation that failed.
    pub fn context(self, operation: &'static str) -> Self {
        Self::Context {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through any context wrappers.
    pub fn root(&self) -> &ClientError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.root(),
            Self::AuthFailed(_) | Self::Unauthorized(_) | Self::TokenNotActive(_)
        )
    }

    /// Check if this error indicates missing permissions.
    pub fn is_forbidden(&self) -> bool {
        matches!(self.root(), Self::Forbidden(_))
    }

    /// Check if this error is an IP-filter rejection.
    pub fn is_ip_restricted(&self) -> bool {
        matches!(self.root(), Self::IpRestricted(_))
    }

    /// Classify a failed API response by HTTP status and envelope error codes.
    ///
    /// IP restriction takes precedence over the HTTP status, since Cloudflare
    /// reports it as a 403 alongside ordinary permission failures.
    pub fn from_api_response(status: u16, url: String, message: String, codes: Vec<i64>) -> Self {
        if codes.contains(&CODE_IP_RESTRICTED) {
            return Self::IpRestricted(message);
        }
        if status == 401 || codes.iter().any(|c| AUTH_HEADER_CODES.contains(c)) {
            return Self::Unauthorized(message);
        }
        if status == 403 {
            return Self::Forbidden(message);
        }
        Self::ApiError {
            status,
            url,
            message,
            codes,
        }
    }
}
