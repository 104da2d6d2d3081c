//! Action protocol between the runtime, the driver, and background tasks.
//!
//! Actions represent both user inputs and the results of async commands.
//! Commands are what screens ask the runtime to do; each is tagged with the
//! driver's generation so late results can be recognized.
//!
//! # Module Structure
//!
//! - `redaction`: Security-focused logging wrappers (`RedactedAction`, `RedactedCommand`)
//! - `variants`: `Action`, `Command`, `Outcome`, and `Tagged`
//! - `tests`: Redaction and security tests
//!
//! # Security Note
//!
//! When logging actions or commands, use `RedactedAction(&action)` and
//! `RedactedCommand(&command)` instead of `?action` so typed characters,
//! secrets, and error text never reach log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `crate::app::App`)
//! - Async command execution (see `crate::runtime::side_effects`)

pub mod redaction;
pub mod variants;

pub use redaction::{RedactedAction, RedactedCommand};
pub use variants::{Action, Command, NewAccount, Outcome, Tagged};

#[cfg(test)]
mod tests;
