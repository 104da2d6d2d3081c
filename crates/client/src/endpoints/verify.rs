//! Credential verification endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{read_result, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{TokenVerification, User};

/// Verify a scoped API token via `GET /user/tokens/verify`.
///
/// The token must report status `active`.
pub async fn verify_api_token(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    max_retries: usize,
) -> Result<TokenVerification> {
    let url = format!("{}/user/tokens/verify", base_url);
    let builder = credentials.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    let (verification, _) = read_result::<TokenVerification>(response).await?;

    if !verification.is_active() {
        return Err(ClientError::TokenNotActive(verification.status));
    }
    Ok(verification)
}

/// Verify global API key credentials via `GET /user`.
pub async fn verify_api_key(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    max_retries: usize,
) -> Result<User> {
    let url = format!("{}/user", base_url);
    let builder = credentials.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    let (user, _) = read_result::<User>(response).await?;
    Ok(user)
}

/// Verify credentials with the endpoint matching their kind.
pub async fn verify_credentials(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    max_retries: usize,
) -> Result<()> {
    if credentials.is_api_token() {
        verify_api_token(client, base_url, credentials, max_retries).await?;
    } else {
        verify_api_key(client, base_url, credentials, max_retries).await?;
    }
    Ok(())
}
