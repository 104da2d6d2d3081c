//! Tests for action redaction and security.
//!
//! These tests make sure `RedactedAction` and `RedactedCommand` never leak
//! typed characters, secrets, account names, or error text.

use crate::action::redaction::{RedactedAction, RedactedCommand};
use crate::action::variants::{Action, Command};

/// Helper function to get redacted debug output for an action.
pub fn redacted_debug(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

/// Helper function to get redacted debug output for a command.
pub fn redacted_command(command: &Command) -> String {
    format!("{:?}", RedactedCommand(command))
}
