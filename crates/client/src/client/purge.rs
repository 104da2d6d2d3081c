//! Cache purge API methods for [`CloudflareClient`].

use crate::client::CloudflareClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{PurgeParams, PurgeRequest};

impl CloudflareClient {
    /// Purge cached content for a zone.
    pub async fn purge_cache(&self, zone_id: &str, request: &PurgeRequest) -> Result<()> {
        self.call(
            "purge cache",
            endpoints::purge_cache(
                &self.http,
                &self.base_url,
                &self.credentials,
                zone_id,
                request,
                self.max_retries,
            ),
        )
        .await?;
        Ok(())
    }

    /// Purge using flat parameters; the first populated mode is used.
    pub async fn purge_cache_with_params(&self, zone_id: &str, params: PurgeParams) -> Result<()> {
        let request = PurgeRequest::try_from(params).map_err(|e| e.context("purge cache"))?;
        self.purge_cache(zone_id, &request).await
    }
}
