//! Account side effects: verify-and-save, set default, remove.

use std::sync::Arc;

use cfctl_config::Account;
use tokio::sync::mpsc::Sender;

use super::{Services, complete, release_override, send_config_snapshot};
use crate::action::{Action, NewAccount, Outcome};
use crate::runtime::client::build_client;

/// Verify new credentials against the API, then store the secret and the account.
pub fn handle_verify_and_save(
    services: Services,
    tx: Sender<Action>,
    generation: u64,
    account: NewAccount,
) {
    let tracker = services.task_tracker.clone();
    tracker.spawn(async move {
        let result = verify_and_save(&services, account).await;
        if result.is_ok() {
            send_config_snapshot(&services, &tx).await;
        }
        complete(&tx, generation, Outcome::AccountVerified(result)).await;
    });
}

async fn verify_and_save(services: &Services, new: NewAccount) -> Result<(), String> {
    let NewAccount {
        name,
        email,
        auth_type,
        secret,
    } = new;
    let account = Account::new(name, email, auth_type);
    let settings = services.store.lock().await.config().api.clone();

    let client = build_client(
        &account,
        secret.clone(),
        &settings,
        services.api_base_url.as_deref(),
    )
    .map_err(|e| format!("credential verification failed: {e}"))?;
    client
        .verify_credentials()
        .await
        .map_err(|e| format!("credential verification failed: {e}"))?;
    tracing::info!(account = %account.name, auth_type = %account.auth_type, "Credentials verified");

    let credentials = Arc::clone(&services.credentials);
    let key = account.name.clone();
    tokio::task::spawn_blocking(move || credentials.store(&key, &secret))
        .await
        .map_err(|e| format!("failed to store credential: {e}"))?
        .map_err(|e| format!("failed to store credential: {e}"))?;

    let name = account.name.clone();
    let saved = services
        .store
        .lock()
        .await
        .add_account(account)
        .map_err(|e| format!("failed to save account: {e}"));
    if saved.is_err() {
        discard_credential(services, name).await;
    }
    saved
}

/// Delete a secret stored for an account that never made it into the config.
async fn discard_credential(services: &Services, name: String) {
    let credentials = Arc::clone(&services.credentials);
    let key = name.clone();
    match tokio::task::spawn_blocking(move || credentials.delete(&key)).await {
        Ok(Ok(())) => tracing::debug!(account = %name, "Discarded credential of unsaved account"),
        Ok(Err(e)) if e.is_not_found() => {}
        Ok(Err(e)) => {
            tracing::warn!(account = %name, error = %e, "Failed to discard credential of unsaved account")
        }
        Err(e) => tracing::warn!(account = %name, error = %e, "Credential cleanup task failed"),
    }
}

/// Make `name` the default account.
pub fn handle_set_default(services: Services, tx: Sender<Action>, generation: u64, name: String) {
    let tracker = services.task_tracker.clone();
    tracker.spawn(async move {
        let result = services
            .store
            .lock()
            .await
            .set_default_account(&name)
            .map(|()| name)
            .map_err(|e| format!("failed to set default account: {e}"));
        if result.is_ok() {
            release_override(&services, &tx, None).await;
            send_config_snapshot(&services, &tx).await;
        }
        complete(&tx, generation, Outcome::DefaultAccountSet(result)).await;
    });
}

/// Delete the account's credential, then the account itself.
///
/// A missing credential is not an error. Any other keyring failure leaves
/// the configuration untouched.
pub fn handle_remove(services: Services, tx: Sender<Action>, generation: u64, name: String) {
    let tracker = services.task_tracker.clone();
    tracker.spawn(async move {
        let result = remove(&services, name).await;
        if let Ok(removed) = &result {
            release_override(&services, &tx, Some(removed.as_str())).await;
            send_config_snapshot(&services, &tx).await;
        }
        complete(&tx, generation, Outcome::AccountRemoved(result)).await;
    });
}

async fn remove(services: &Services, name: String) -> Result<String, String> {
    let credentials = Arc::clone(&services.credentials);
    let key = name.clone();
    let deleted = tokio::task::spawn_blocking(move || credentials.delete(&key))
        .await
        .map_err(|e| format!("failed to delete credential: {e}"))?;
    match deleted {
        Ok(()) => {}
        Err(e) if e.is_not_found() => {
            tracing::debug!(account = %name, "No stored credential to delete");
        }
        Err(e) => return Err(format!("failed to delete credential: {e}")),
    }

    services
        .store
        .lock()
        .await
        .remove_account(&name)
        .map_err(|e| format!("failed to remove account: {e}"))?;
    Ok(name)
}
