//! Path helpers for configuration and log file locations.
//!
//! Responsibilities:
//! - Resolve the configuration file path from flag, environment, or default.
//! - Use the `directories` crate for platform-appropriate locations.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::CONFIG_PATH_ENV;
use crate::env::env_var_or_none;
use crate::error::{ConfigError, Result};

/// Returns the default path to the configuration file: `~/.config/cfctl/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
    Ok(dirs
        .home_dir()
        .join(".config")
        .join("cfctl")
        .join("config.yaml"))
}

/// Resolve the configuration path.
///
/// Precedence: explicit path (if not blank) > `CFCTL_CONFIG` > default.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.to_string_lossy().trim().is_empty()) {
        return Ok(path);
    }
    if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

/// Returns the default directory for log files.
///
/// Falls back to a relative `logs` directory when no data directory exists.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "cfctl")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_explicit_path_wins_over_env() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/from-env.yaml"), || {
            let path = resolve_config_path(Some(PathBuf::from("/tmp/explicit.yaml"))).unwrap();
            assert_eq!(path, PathBuf::from("/tmp/explicit.yaml"));
        });
    }

    #[test]
    #[serial]
    fn test_env_used_when_explicit_blank() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/from-env.yaml"), || {
            let path = resolve_config_path(Some(PathBuf::from("  "))).unwrap();
            assert_eq!(path, PathBuf::from("/tmp/from-env.yaml"));
        });
    }

    #[test]
    #[serial]
    fn test_default_path_shape() {
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let path = resolve_config_path(None).unwrap();
            assert!(path.ends_with(".config/cfctl/config.yaml"));
        });
    }
}
