//! Configuration management for cfctl.
//!
//! This crate provides the configuration document, its YAML-backed store,
//! the keyring-backed credential store, and the pure input validators
//! shared by the client and the terminal UI.

pub mod constants;
pub mod credentials;
mod env;
pub mod error;
pub mod persistence;
pub mod types;
pub mod validation;

pub use credentials::{CredentialStore, KeyringCredentialStore};
#[cfg(any(test, feature = "test-utils"))]
pub use credentials::MemoryCredentialStore;
pub use env::{api_base_url_override, env_var_or_none};
pub use error::{ConfigError, CredentialError, Result};
pub use persistence::{ConfigStore, default_config_path, default_log_dir, resolve_config_path};
pub use types::{Account, ApiSettings, AuthType, CacheSettings, Config, DefaultSettings, UiSettings};
pub use validation::ValidationError;
