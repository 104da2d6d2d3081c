//! Cloudflare client construction for a stored account.
//!
//! Responsibilities:
//! - Pair an account with its secret and the persisted `api` settings.
//! - Apply the base URL override used by tests and proxies.
//!
//! Does NOT handle:
//! - Fetching secrets from the keyring (see `side_effects`).

use cfctl_client::{CloudflareClient, Credentials, Result};
use cfctl_config::{Account, ApiSettings};
use secrecy::SecretString;

/// Build a client for `account` authenticated with `secret`.
///
/// `base_url` replaces the default API endpoint when set.
pub fn build_client(
    account: &Account,
    secret: SecretString,
    settings: &ApiSettings,
    base_url: Option<&str>,
) -> Result<CloudflareClient> {
    let credentials = Credentials::for_account(account, secret)?;
    let mut builder = CloudflareClient::builder()
        .credentials(credentials)
        .from_settings(settings);
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    builder.build()
}
