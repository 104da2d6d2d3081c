//! Credential storage for account secrets.
//!
//! Responsibilities:
//! - Define the `CredentialStore` seam used by the runtime.
//! - Store, fetch, and delete secrets in the OS keyring, keyed by account name.
//!
//! Does NOT handle:
//! - Account metadata (see `ConfigStore`).
//! - Deciding when credentials are needed (see the TUI runtime).
//!
//! Invariants:
//! - Secrets only cross this boundary as `SecretString`.
//! - `KEYRING_SERVICE` is the service name for every keyring entry.
//! - Secrets are never logged; only account names are.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::KEYRING_SERVICE;
use crate::error::CredentialError;

/// A store for account secrets keyed by account name.
pub trait CredentialStore: Send + Sync {
    /// Store (or overwrite) the secret for `account`.
    fn store(&self, account: &str, secret: &SecretString) -> Result<(), CredentialError>;

    /// Fetch the secret for `account`.
    fn get(&self, account: &str) -> Result<SecretString, CredentialError>;

    /// Delete the secret for `account`.
    fn delete(&self, account: &str) -> Result<(), CredentialError>;
}

/// Credential store backed by the platform keyring.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringCredentialStore {
    /// Create a store using the standard `cfctl` service name.
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    /// The keyring service name entries are stored under.
    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, account: &str) -> Result<keyring::Entry, CredentialError> {
        keyring::Entry::new(&self.service, account).map_err(|e| map_keyring_error(account, e))
    }
}

fn map_keyring_error(account: &str, err: keyring::Error) -> CredentialError {
    match err {
        keyring::Error::NoEntry => CredentialError::NotFound(account.to_string()),
        source => CredentialError::Keyring {
            account: account.to_string(),
            source,
        },
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn store(&self, account: &str, secret: &SecretString) -> Result<(), CredentialError> {
        self.entry(account)?
            .set_password(secret.expose_secret())
            .map_err(|e| map_keyring_error(account, e))?;
        tracing::debug!(account = %account, "Stored credential in keyring");
        Ok(())
    }

    fn get(&self, account: &str) -> Result<SecretString, CredentialError> {
        let password = self
            .entry(account)?
            .get_password()
            .map_err(|e| map_keyring_error(account, e))?;
        Ok(SecretString::new(password.into()))
    }

    fn delete(&self, account: &str) -> Result<(), CredentialError> {
        self.entry(account)?
            .delete_credential()
            .map_err(|e| map_keyring_error(account, e))?;
        tracing::debug!(account = %account, "Deleted credential from keyring");
        Ok(())
    }
}

/// In-process credential store for tests and environments without a keyring.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
    unavailable: std::sync::atomic::AtomicBool,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secrets.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no secrets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every operation fail the way a locked keyring does.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable
            .store(unavailable, std::sync::atomic::Ordering::SeqCst);
    }

    fn check_available(&self, account: &str) -> Result<(), CredentialError> {
        if self.unavailable.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(CredentialError::Keyring {
                account: account.to_string(),
                source: keyring::Error::NoStorageAccess("keyring is locked".into()),
            });
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl CredentialStore for MemoryCredentialStore {
    fn store(&self, account: &str, secret: &SecretString) -> Result<(), CredentialError> {
        self.check_available(account)?;
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(account.to_string(), secret.expose_secret().to_string());
        }
        Ok(())
    }

    fn get(&self, account: &str) -> Result<SecretString, CredentialError> {
        self.check_available(account)?;
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(account).cloned())
            .map(|s| SecretString::new(s.into()))
            .ok_or_else(|| CredentialError::NotFound(account.to_string()))
    }

    fn delete(&self, account: &str) -> Result<(), CredentialError> {
        self.check_available(account)?;
        self.entries
            .lock()
            .ok()
            .and_then(|mut entries| entries.remove(account))
            .map(|_| ())
            .ok_or_else(|| CredentialError::NotFound(account.to_string()))
    }
}
