//! Error types for configuration and credential storage.
//!
//! Responsibilities:
//! - Define the failures the configuration store can report.
//! - Define the failures the credential store can report.
//!
//! Does NOT handle:
//! - Input validation errors (see `validation`).
//! - Presenting errors to the user (see the TUI crate).

use std::path::PathBuf;

/// Result type alias for configuration store operations.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Errors that can occur while loading, saving, or mutating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No account with the given name exists.
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// The operation needs at least one configured account.
    #[error("no accounts configured")]
    NoAccounts,

    /// The user's home directory could not be determined.
    #[error("failed to determine home directory")]
    NoHomeDir,

    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Errors that can occur while talking to the platform secret store.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Nothing is stored for this account.
    #[error("no credential stored for account '{0}'")]
    NotFound(String),

    /// The platform keyring rejected the operation.
    #[error("keyring error for account '{account}': {source}")]
    Keyring {
        account: String,
        #[source]
        source: keyring::Error,
    },
}

impl CredentialError {
    /// Returns true when the error only means the entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
