//! Zone API methods for [`CloudflareClient`].

use crate::client::CloudflareClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Zone;

impl CloudflareClient {
    /// List every zone the credentials can read, across all pages.
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.call(
            "list zones",
            endpoints::list_zones(
                &self.http,
                &self.base_url,
                &self.credentials,
                self.max_retries,
            ),
        )
        .await
    }

    /// Fetch a single zone by id.
    pub async fn get_zone(&self, zone_id: &str) -> Result<Zone> {
        self.call(
            "get zone",
            endpoints::get_zone(
                &self.http,
                &self.base_url,
                &self.credentials,
                zone_id,
                self.max_retries,
            ),
        )
        .await
    }
}
