//! The configuration store: the only place the configuration is mutated.
//!
//! Responsibilities:
//! - Own the in-memory `Config` and its file path.
//! - Expose the account operations (add, remove, get, default, set default).
//! - Write the document atomically after every mutation.
//!
//! Does NOT handle:
//! - Path determination (uses the `path` module).
//! - Keyring operations for account secrets.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{ConfigError, Result};
use crate::types::{Account, Config};

/// Loads, owns, and saves the cfctl configuration document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Load the configuration at `path`.
    ///
    /// A missing file is created with the documented defaults. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, creating defaults");
            let store = Self {
                path,
                config: Config::default(),
            };
            store.save()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        };

        if config.normalize() {
            tracing::warn!(
                path = %path.display(),
                "Config had an inconsistent default account, repaired in memory"
            );
        }

        tracing::debug!(
            path = %path.display(),
            accounts = config.accounts.len(),
            "Loaded config"
        );
        Ok(Self { path, config })
    }

    /// Load the configuration from the resolved default location.
    pub fn load_default() -> Result<Self> {
        Self::load(super::resolve_config_path(None)?)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write the current configuration to disk.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.path, &self.config)
    }

    /// Insert or update an account (upsert by name) and persist.
    pub fn add_account(&mut self, account: Account) -> Result<()> {
        let name = account.name.clone();
        let mut next = self.config.clone();
        next.upsert_account(account, Utc::now());
        self.commit(next)?;
        tracing::info!(account = %name, "Account saved");
        Ok(())
    }

    /// Remove an account and persist. Errors if the name is unknown.
    pub fn remove_account(&mut self, name: &str) -> Result<Account> {
        let mut next = self.config.clone();
        let removed = next.remove_account(name)?;
        self.commit(next)?;
        tracing::info!(account = %name, "Account removed");
        Ok(removed)
    }

    /// Look up an account by name.
    pub fn get_account(&self, name: &str) -> Result<&Account> {
        self.config.account(name)
    }

    /// The default account. Errors if no accounts are configured.
    pub fn default_account(&self) -> Result<&Account> {
        self.config.default_account()
    }

    /// Make `name` the default account and persist.
    pub fn set_default_account(&mut self, name: &str) -> Result<()> {
        let mut next = self.config.clone();
        next.set_default_account(name)?;
        self.commit(next)?;
        tracing::info!(account = %name, "Default account changed");
        Ok(())
    }

    fn commit(&mut self, next: Config) -> Result<()> {
        write_atomic(&self.path, &next)?;
        self.config = next;
        Ok(())
    }
}

/// Writes to a temporary file first, then renames it over the target, so
/// the config file is never left partially written.
fn write_atomic(path: &Path, config: &Config) -> Result<()> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_yaml::to_string(config)?;
    let temp_path = path.with_extension("yaml.tmp");
    std::fs::write(&temp_path, content).map_err(write_err)?;
    std::fs::rename(&temp_path, path).map_err(write_err)?;
    Ok(())
}
