//! The persisted configuration document.
//!
//! Responsibilities:
//! - Define `Config` and its `defaults`, `api`, `ui`, and `cache` sections.
//! - Implement the account mutation rules that keep the default-account invariant.
//!
//! Does NOT handle:
//! - File I/O (see `persistence`). Mutations here are in-memory only and
//!   are exposed to callers exclusively through `ConfigStore`.
//!
//! Invariants:
//! - If `accounts` is non-empty, exactly one account has `default = true`
//!   and `defaults.account` names it.
//! - If `accounts` is empty, `defaults.account` is empty.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_VERSION, DEFAULT_DOMAINS_TTL_SECS, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT, DEFAULT_THEME,
    DEFAULT_TIMEOUT_SECS,
};
use crate::error::{ConfigError, Result};
use crate::types::Account;

/// Default selections applied when the user does not pick explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Name of the default account, empty when none is configured.
    pub account: String,
    pub theme: String,
    pub output: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            account: String::new(),
            theme: DEFAULT_THEME.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}

/// API client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Per-call timeout in seconds. Zero means the built-in default.
    pub timeout: u64,
    /// Retry budget for transient failures. Zero means the built-in default.
    pub retries: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ApiSettings {
    /// Effective timeout, falling back to the default when unset.
    pub fn timeout_duration(&self) -> Duration {
        if self.timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout)
        }
    }

    /// Effective retry budget, falling back to the default when unset.
    pub fn effective_retries(&self) -> usize {
        if self.retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            self.retries
        }
    }
}

/// Terminal UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub confirmations: bool,
    pub animations: bool,
    pub colors: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            confirmations: true,
            animations: true,
            colors: true,
        }
    }
}

/// Domain list cache preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Time-to-live for cached domain lists, in seconds.
    pub domains_ttl: u64,
    pub enabled: bool,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            domains_ttl: DEFAULT_DOMAINS_TTL_SECS,
            enabled: true,
        }
    }
}

/// The complete configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub defaults: DefaultSettings,
    pub api: ApiSettings,
    pub ui: UiSettings,
    pub cache: CacheSettings,
    pub accounts: Vec<Account>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            defaults: DefaultSettings::default(),
            api: ApiSettings::default(),
            ui: UiSettings::default(),
            cache: CacheSettings::default(),
            accounts: Vec::new(),
        }
    }
}

impl Config {
    /// Look up an account by name.
    pub fn account(&self, name: &str) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| ConfigError::AccountNotFound(name.to_string()))
    }

    /// The default account, or the first account when no flag is set.
    pub fn default_account(&self) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.default)
            .or_else(|| self.accounts.first())
            .ok_or(ConfigError::NoAccounts)
    }

    /// Whether any account is configured.
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// Insert a new account or update an existing one with the same name.
    ///
    /// New accounts get both timestamps set to `now`; the first account
    /// becomes the default. Updates keep `created_at` and the existing
    /// default flag, and advance `updated_at`.
    pub(crate) fn upsert_account(&mut self, mut account: Account, now: DateTime<Utc>) {
        if let Some(existing) = self.accounts.iter_mut().find(|a| a.name == account.name) {
            account.created_at = existing.created_at;
            account.default = existing.default;
            // Keep updated_at strictly increasing even on coarse clocks.
            account.updated_at = if now > existing.updated_at {
                now
            } else {
                existing.updated_at + chrono::Duration::microseconds(1)
            };
            *existing = account;
            return;
        }

        account.created_at = now;
        account.updated_at = now;
        account.default = false;
        self.accounts.push(account);

        if self.accounts.len() == 1 {
            self.accounts[0].default = true;
            self.defaults.account = self.accounts[0].name.clone();
        }
    }

    /// Remove an account by name, reassigning the default if needed.
    pub(crate) fn remove_account(&mut self, name: &str) -> Result<Account> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| ConfigError::AccountNotFound(name.to_string()))?;

        let removed = self.accounts.remove(index);

        if let Some(first) = self.accounts.first_mut() {
            if removed.default {
                first.default = true;
                self.defaults.account = first.name.clone();
            }
        } else {
            self.defaults.account.clear();
        }

        Ok(removed)
    }

    /// Make `name` the only default account.
    pub(crate) fn set_default_account(&mut self, name: &str) -> Result<()> {
        self.account(name)?;
        for account in &mut self.accounts {
            account.default = account.name == name;
        }
        self.defaults.account = name.to_string();
        Ok(())
    }

    /// Repair a hand-edited document so the default-account invariant holds.
    ///
    /// Returns true when anything had to change.
    pub(crate) fn normalize(&mut self) -> bool {
        if self.accounts.is_empty() {
            let changed = !self.defaults.account.is_empty();
            self.defaults.account.clear();
            return changed;
        }

        let flagged = self.accounts.iter().filter(|a| a.default).count();
        let named_ok = self
            .accounts
            .iter()
            .any(|a| a.default && a.name == self.defaults.account);
        if flagged == 1 && named_ok {
            return false;
        }

        let chosen = self
            .accounts
            .iter()
            .position(|a| a.name == self.defaults.account)
            .or_else(|| self.accounts.iter().position(|a| a.default))
            .unwrap_or(0);
        for (i, account) in self.accounts.iter_mut().enumerate() {
            account.default = i == chosen;
        }
        self.defaults.account = self.accounts[chosen].name.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuthType;

    fn token_account(name: &str) -> Account {
        Account::new(name, None, AuthType::Token)
    }

    fn default_count(config: &Config) -> usize {
        config.accounts.iter().filter(|a| a.default).count()
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.defaults.theme, "dark");
        assert_eq!(config.defaults.output, "interactive");
        assert_eq!(config.api.timeout, 30);
        assert_eq!(config.api.retries, 3);
        assert!(config.ui.confirmations && config.ui.animations && config.ui.colors);
        assert_eq!(config.cache.domains_ttl, 300);
        assert!(config.cache.enabled);
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  timeout: 10\n").unwrap();
        assert_eq!(config.api.timeout, 10);
        assert_eq!(config.api.retries, 3);
        assert_eq!(config.defaults.theme, "dark");
    }

    #[test]
    fn test_zero_api_values_fall_back() {
        let api = ApiSettings {
            timeout: 0,
            retries: 0,
        };
        assert_eq!(api.timeout_duration(), Duration::from_secs(30));
        assert_eq!(api.effective_retries(), 3);
    }

    #[test]
    fn test_first_account_becomes_default() {
        let mut config = Config::default();
        config.upsert_account(token_account("prod"), Utc::now());
        config.upsert_account(token_account("staging"), Utc::now());

        assert_eq!(config.defaults.account, "prod");
        assert!(config.account("prod").unwrap().default);
        assert!(!config.account("staging").unwrap().default);
    }

    #[test]
    fn test_upsert_preserves_default_flag_and_created_at() {
        let mut config = Config::default();
        let t0 = Utc::now();
        config.upsert_account(token_account("prod"), t0);

        let mut updated = Account::new("prod", Some("a@b.io".into()), AuthType::Key);
        updated.default = false;
        config.upsert_account(updated, t0);

        let stored = config.account("prod").unwrap();
        assert!(stored.default);
        assert_eq!(stored.created_at, t0);
        assert!(stored.updated_at > t0);
        assert_eq!(stored.auth_type, AuthType::Key);
        assert_eq!(config.accounts.len(), 1);
    }

    #[test]
    fn test_remove_default_reassigns_to_first_remaining() {
        let mut config = Config::default();
        for name in ["aaa", "bbb", "ccc"] {
            config.upsert_account(token_account(name), Utc::now());
        }
        config.remove_account("aaa").unwrap();

        assert_eq!(config.defaults.account, "bbb");
        assert_eq!(default_count(&config), 1);
    }

    #[test]
    fn test_remove_last_account_clears_default_name() {
        let mut config = Config::default();
        config.upsert_account(token_account("solo"), Utc::now());
        config.remove_account("solo").unwrap();
        assert!(config.defaults.account.is_empty());
        assert!(matches!(
            config.default_account(),
            Err(ConfigError::NoAccounts)
        ));
    }

    #[test]
    fn test_set_default_unknown_leaves_state() {
        let mut config = Config::default();
        config.upsert_account(token_account("prod"), Utc::now());
        let before = config.clone();
        assert!(config.set_default_account("nope").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_normalize_repairs_multiple_defaults() {
        let mut config = Config::default();
        let mut a = token_account("aaa");
        a.default = true;
        let mut b = token_account("bbb");
        b.default = true;
        config.accounts = vec![a, b];
        config.defaults.account = "bbb".to_string();

        assert!(config.normalize());
        assert_eq!(default_count(&config), 1);
        assert!(config.account("bbb").unwrap().default);
        assert!(!config.normalize());
    }
}
