//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (`TerminalGuard`)
//! - File logging setup
//! - Client construction for an account
//! - Async side effect handlers for commands
//!
//! Does NOT handle:
//! - Screen state or rendering (see `cfctl::screens` and `cfctl::ui`).
//! - Cloudflare wire details (see `cfctl_client`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks so the UI never blocks.

pub mod client;
pub mod logging;
pub mod side_effects;
pub mod terminal;
