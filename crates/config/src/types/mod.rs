//! Configuration type definitions for cfctl.
//!
//! Responsibilities:
//! - Define the persisted configuration document and its sections.
//! - Define the account record and its authentication type.
//! - Provide the documented defaults for every setting.
//!
//! Does NOT handle:
//! - Reading or writing the configuration file (see `persistence`).
//! - Secret storage (see `credentials`).
//!
//! Invariants:
//! - Secrets never appear in these types; only the OS keyring holds them.
//! - Every section deserializes with defaults so partial files load cleanly.

mod account;
mod settings;

pub use account::{Account, AuthType};
pub use settings::{ApiSettings, CacheSettings, Config, DefaultSettings, UiSettings};
