//! Cache purge execution.

use cfctl_client::PurgeRequest;
use tokio::sync::mpsc::Sender;

use super::{Services, active_client, complete};
use crate::action::{Action, Outcome};

pub fn handle_purge(
    services: Services,
    tx: Sender<Action>,
    generation: u64,
    zone_id: String,
    request: PurgeRequest,
) {
    let tracker = services.task_tracker.clone();
    tracker.spawn(async move {
        let result = match active_client(&services).await {
            Ok(client) => client
                .purge_cache(&zone_id, &request)
                .await
                .map_err(|e| e.to_string()),
            Err(message) => Err(message),
        };
        match &result {
            Ok(()) => tracing::info!(
                zone_id = %zone_id,
                noun = request.item_noun(),
                items = request.item_count(),
                "Cache purged"
            ),
            Err(message) => tracing::warn!(zone_id = %zone_id, error = %message, "Purge failed"),
        }
        complete(&tx, generation, Outcome::PurgeCompleted(result)).await;
    });
}
