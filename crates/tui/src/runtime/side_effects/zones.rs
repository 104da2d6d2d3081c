//! Zone loading and its competing timer.

use std::time::Duration;

use tokio::sync::mpsc::Sender;

use super::{Services, active_client, complete};
use crate::action::{Action, Outcome};

/// Fetch every zone visible to the active account.
pub fn handle_load_zones(services: Services, tx: Sender<Action>, generation: u64) {
    let tracker = services.task_tracker.clone();
    tracker.spawn(async move {
        let result = match active_client(&services).await {
            Ok(client) => client.list_zones().await.map_err(|e| e.to_string()),
            Err(message) => Err(message),
        };
        if let Err(message) = &result {
            tracing::warn!(error = %message, "Failed to load zones");
        }
        complete(&tx, generation, Outcome::ZonesLoaded(result)).await;
    });
}

/// Fire `ZonesTimedOut` after `after`. The screen decides which result wins.
pub fn handle_zones_timeout(services: Services, tx: Sender<Action>, generation: u64, after: Duration) {
    services.task_tracker.spawn(async move {
        tokio::time::sleep(after).await;
        complete(&tx, generation, Outcome::ZonesTimedOut).await;
    });
}
