//! Credential verification for [`CloudflareClient`].

use crate::client::CloudflareClient;
use crate::endpoints;
use crate::error::Result;

impl CloudflareClient {
    /// Check that the configured credentials are accepted by Cloudflare.
    ///
    /// Token credentials must verify as `active`; key credentials must be
    /// able to read the user profile.
    pub async fn verify_credentials(&self) -> Result<()> {
        self.call(
            "verify credentials",
            endpoints::verify_credentials(
                &self.http,
                &self.base_url,
                &self.credentials,
                self.max_retries,
            ),
        )
        .await
    }
}
