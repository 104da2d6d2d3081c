//! Read-only context handed to screens.

use std::path::PathBuf;

use cfctl_config::Config;

use crate::ui::Theme;

/// Everything a screen may read but never mutate.
#[derive(Debug, Clone)]
pub struct Context {
    /// Latest configuration snapshot. Replaced wholesale on `ConfigReloaded`.
    pub config: Config,
    pub config_path: PathBuf,
    pub theme: Theme,
    /// `--account` for this run; never persisted.
    pub account_override: Option<String>,
    /// Animation frame, advanced on every tick.
    pub frame: u64,
}

impl Context {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        theme: Theme,
        account_override: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            theme,
            account_override,
            frame: 0,
        }
    }

    /// The account operations run against: the override if given, else the default.
    pub fn active_account(&self) -> Option<&str> {
        if let Some(name) = self.account_override.as_deref() {
            return Some(name);
        }
        self.config
            .default_account()
            .ok()
            .map(|account| account.name.as_str())
    }
}
