//! Async side effect handlers for screen commands.
//!
//! Responsibilities:
//! - Execute each tagged `Command` on a tracked tokio task.
//! - Deliver the result as `Action::Completed` carrying the command's generation.
//! - Send a fresh config snapshot after every successful store mutation.
//! - Release the `--account` override once the user changes accounts in the UI.
//!
//! Does NOT handle:
//! - Screen state (results are messages, never callbacks).
//! - Deciding whether a result is stale (see `crate::app::App`).
//!
//! Invariants:
//! - Keyring calls run on the blocking pool.
//! - Secrets never appear in logs; commands are logged through `RedactedCommand`.
//! - Error text sent back to screens is already user-facing.

mod accounts;
mod purge;
mod zones;

use std::sync::Arc;
use std::time::Instant;

use cfctl_client::CloudflareClient;
use cfctl_config::{ConfigStore, CredentialStore};
use tokio::sync::{Mutex, mpsc::Sender};
use tracing::{Instrument, info_span};

pub use tokio_util::task::TaskTracker;

use crate::action::{Action, Command, Outcome, RedactedCommand, Tagged};
use crate::runtime::client::build_client;

/// The configuration store shared between the runtime tasks.
pub type SharedStore = Arc<Mutex<ConfigStore>>;

/// The `--account` override for this run, shared by every task.
pub type SharedOverride = Arc<Mutex<Option<String>>>;

/// Everything a side effect may touch.
#[derive(Clone)]
pub struct Services {
    pub store: SharedStore,
    pub credentials: Arc<dyn CredentialStore>,
    /// `--account` for this run; cleared by set-default or by removing that account.
    pub account_override: SharedOverride,
    /// Replaces the default API endpoint (`CFCTL_API_URL`).
    pub api_base_url: Option<String>,
    pub task_tracker: TaskTracker,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

/// Execute one tagged command.
///
/// Returns once the work is spawned; the result arrives later on `tx`.
pub async fn handle_side_effects(tagged: Tagged, services: Services, tx: Sender<Action>) {
    let Tagged {
        generation,
        command,
    } = tagged;
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_command",
        command = command.name(),
        generation,
        duration_ms = tracing::field::Empty,
    );

    async move {
        tracing::debug!(command = ?RedactedCommand(&command), "Dispatching command");
        match command {
            Command::VerifyAndSaveAccount(account) => {
                accounts::handle_verify_and_save(services, tx, generation, account)
            }
            Command::SetDefaultAccount(name) => {
                accounts::handle_set_default(services, tx, generation, name)
            }
            Command::RemoveAccount(name) => accounts::handle_remove(services, tx, generation, name),
            Command::LoadZones => zones::handle_load_zones(services, tx, generation),
            Command::StartZonesTimeout(after) => {
                zones::handle_zones_timeout(services, tx, generation, after)
            }
            Command::Purge { zone_id, request } => {
                purge::handle_purge(services, tx, generation, zone_id, request)
            }
        }
        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Send a result back to the driver.
async fn complete(tx: &Sender<Action>, generation: u64, outcome: Outcome) {
    if tx
        .send(Action::Completed {
            generation,
            outcome,
        })
        .await
        .is_err()
    {
        tracing::debug!(generation, "Action channel closed, dropping result");
    }
}

/// Send the store's current configuration to the driver.
async fn send_config_snapshot(services: &Services, tx: &Sender<Action>) {
    let config = services.store.lock().await.config().clone();
    if tx.send(Action::ConfigReloaded(config)).await.is_err() {
        tracing::debug!("Action channel closed, dropping config snapshot");
    }
}

/// Drop the `--account` override after an account change made in the UI.
///
/// With `removed`, only removal of the override account itself releases it.
async fn release_override(services: &Services, tx: &Sender<Action>, removed: Option<&str>) {
    let released = {
        let mut current = services.account_override.lock().await;
        let release = match (current.as_deref(), removed) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(name), Some(removed)) => name == removed,
        };
        if release { current.take() } else { None }
    };
    let Some(name) = released else {
        return;
    };
    tracing::info!(account = %name, "Account override released");
    if tx.send(Action::AccountOverrideCleared).await.is_err() {
        tracing::debug!("Action channel closed, dropping override release");
    }
}

/// Build a client for the active account: the override if set, else the default.
async fn active_client(services: &Services) -> Result<CloudflareClient, String> {
    let override_name = services.account_override.lock().await.clone();
    let (account, settings) = {
        let store = services.store.lock().await;
        let account = match override_name.as_deref() {
            Some(name) => store.get_account(name),
            None => store.default_account(),
        }
        .map_err(|e| format!("failed to get credentials: {e}"))?
        .clone();
        (account, store.config().api.clone())
    };

    let credentials = Arc::clone(&services.credentials);
    let name = account.name.clone();
    let secret = tokio::task::spawn_blocking(move || credentials.get(&name))
        .await
        .map_err(|e| format!("failed to get credentials: {e}"))?
        .map_err(|e| format!("failed to get credentials: {e}"))?;

    build_client(
        &account,
        secret,
        &settings,
        services.api_base_url.as_deref(),
    )
    .map_err(|e| e.to_string())
}
