//! Zone listing endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{encode_path_segment, read_result, send_request_with_retry};
use crate::error::Result;
use crate::models::Zone;

/// Page size requested from `GET /zones`.
pub const ZONES_PER_PAGE: u32 = 50;

/// List every zone visible to the credentials, draining all pages.
pub async fn list_zones(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    max_retries: usize,
) -> Result<Vec<Zone>> {
    let url = format!("{}/zones", base_url);
    let mut zones = Vec::new();
    let mut page: u32 = 1;

    loop {
        let builder = credentials.apply(client.get(&url)).query(&[
            ("page", page.to_string()),
            ("per_page", ZONES_PER_PAGE.to_string()),
        ]);
        let response = send_request_with_retry(builder, max_retries).await?;
        let (batch, info) = read_result::<Vec<Zone>>(response).await?;

        let fetched = batch.len();
        zones.extend(batch);

        let total_pages = info.map(|i| i.total_pages).unwrap_or(page);
        debug!(page, total_pages, fetched, "Fetched zones page");

        if fetched == 0 || page >= total_pages {
            break;
        }
        page += 1;
    }

    Ok(zones)
}

/// Fetch a single zone by id.
pub async fn get_zone(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    zone_id: &str,
    max_retries: usize,
) -> Result<Zone> {
    let url = format!("{}/zones/{}", base_url, encode_path_segment(zone_id));
    let builder = credentials.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;
    let (zone, _) = read_result::<Zone>(response).await?;
    Ok(zone)
}
