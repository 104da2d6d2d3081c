//! Configuration persistence.
//!
//! Responsibilities:
//! - Resolve the configuration file location.
//! - Load the YAML document, creating it with defaults on first run.
//! - Persist every account mutation immediately and atomically.
//!
//! Does NOT handle:
//! - Secret storage (see `credentials`).
//! - Input validation (see `validation`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - In-memory state only changes after the new document has been written,
//!   so the store and the file never diverge.

mod path;
mod store;

pub use path::{default_config_path, default_log_dir, resolve_config_path};
pub use store::ConfigStore;
