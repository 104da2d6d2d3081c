//! Retry helper for HTTP requests with exponential backoff, plus envelope
//! decoding and error classification shared by every endpoint.
//!
//! Requests that fail with a retryable status (429, 502, 503, 504) are
//! retried after 1s, 2s, 4s, ... until the retry budget is spent.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{CloudflareResponse, ResultInfo};

/// Maximum number of retry attempts for transient failures.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request, retrying transient failures with exponential backoff.
///
/// Non-success responses are decoded as a Cloudflare error envelope and
/// classified (see [`ClientError::from_api_response`]).
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all retry attempts are exhausted.
/// Propagates transport errors as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                }
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    status,
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs,
                    "Transient failure, retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }
            debug!(status, attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
        }

        if attempt > 0 {
            debug!(attempt = attempt + 1, "Request completed after retry");
        }
        return check_status(response).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Pass a successful response through; classify anything else.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, codes) = match serde_json::from_str::<CloudflareResponse<serde_json::Value>>(&body)
    {
        Ok(envelope) if !envelope.errors.is_empty() => {
            (envelope.error_summary(), envelope.error_codes())
        }
        _ => (body, Vec::new()),
    };

    Err(ClientError::from_api_response(status, url, message, codes))
}

/// Decode a successful response's envelope into its `result` payload.
///
/// A 2xx envelope with `success: false` is classified like an error status.
pub async fn read_result<T: DeserializeOwned>(
    response: Response,
) -> Result<(T, Option<ResultInfo>)> {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let envelope: CloudflareResponse<T> = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

    if !envelope.success {
        return Err(ClientError::from_api_response(
            status,
            url,
            envelope.error_summary(),
            envelope.error_codes(),
        ));
    }

    let result = envelope
        .result
        .ok_or_else(|| ClientError::InvalidResponse("missing result".to_string()))?;
    Ok((result, envelope.result_info))
}
