//! Cache purge endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{encode_path_segment, read_result, send_request_with_retry};
use crate::error::Result;
use crate::models::{PurgeRequest, PurgeResult};

/// Purge cached content for a zone.
///
/// The request is validated before anything is sent, so an empty or
/// invalid request never reaches the network.
pub async fn purge_cache(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    zone_id: &str,
    request: &PurgeRequest,
    max_retries: usize,
) -> Result<PurgeResult> {
    request.validate()?;

    let url = format!(
        "{}/zones/{}/purge_cache",
        base_url,
        encode_path_segment(zone_id)
    );
    debug!(
        zone_id,
        mode = request.item_noun(),
        items = request.item_count(),
        "Purging cache"
    );

    let builder = credentials.apply(client.post(&url)).json(&request.body());
    let response = send_request_with_retry(builder, max_retries).await?;
    let (result, _) = read_result::<PurgeResult>(response).await?;
    Ok(result)
}
