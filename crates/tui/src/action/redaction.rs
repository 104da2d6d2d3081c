//! Security-focused redaction wrappers for action and command logging.
//!
//! `RedactedAction` and `RedactedCommand` implement `Debug` so that sensitive
//! payloads are never written to log files. Always log
//! `RedactedAction(&action)` instead of `?action`.
//!
//! # Security Invariants
//!
//! - Typed characters are never printed: they may be part of a secret.
//! - Secrets, emails, account names, and error text are never printed.
//! - Purge items are reduced to a count; zone IDs are kept for correlation.
//!
//! # What This Module Does NOT Handle
//!
//! - Actual logging infrastructure (handled by tracing)
//!
//! # Example
//!
//! ```ignore
//! tracing::debug!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: Completed(gen=3, ZonesLoaded(<12 zones>))
//! ```

use crossterm::event::KeyCode;

use crate::action::variants::{Action, Command, Outcome};

/// Redacted wrapper for `Action`.
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(Char(<redacted>), {:?})", key.modifiers),
                code => write!(f, "Input({:?}, {:?})", code, key.modifiers),
            },
            Action::Resize(w, h) => write!(f, "Resize({w}, {h})"),
            Action::Tick => write!(f, "Tick"),
            Action::Completed {
                generation,
                outcome,
            } => write!(
                f,
                "Completed(gen={generation}, {:?})",
                RedactedOutcome(outcome)
            ),
            Action::ConfigReloaded(config) => {
                write!(f, "ConfigReloaded(<{} accounts>)", config.accounts.len())
            }
            Action::AccountOverrideCleared => write!(f, "AccountOverrideCleared"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

/// Redacted wrapper for `Command`.
pub struct RedactedCommand<'a>(pub &'a Command);

impl std::fmt::Debug for RedactedCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Command::VerifyAndSaveAccount(account) => {
                write!(f, "VerifyAndSaveAccount(<redacted>, {})", account.auth_type)
            }
            Command::LoadZones => write!(f, "LoadZones"),
            Command::StartZonesTimeout(after) => write!(f, "StartZonesTimeout({after:?})"),
            Command::Purge { zone_id, request } => write!(
                f,
                "Purge({zone_id}, {}(<{} items>))",
                request.item_noun(),
                request.item_count()
            ),
            Command::SetDefaultAccount(_) => write!(f, "SetDefaultAccount(<redacted>)"),
            Command::RemoveAccount(_) => write!(f, "RemoveAccount(<redacted>)"),
        }
    }
}

struct RedactedOutcome<'a>(&'a Outcome);

fn status<T>(result: &Result<T, String>) -> &'static str {
    if result.is_ok() { "ok" } else { "<error>" }
}

impl std::fmt::Debug for RedactedOutcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Outcome::AccountVerified(r) => write!(f, "AccountVerified({})", status(r)),
            Outcome::ZonesLoaded(Ok(zones)) => write!(f, "ZonesLoaded(<{} zones>)", zones.len()),
            Outcome::ZonesLoaded(Err(_)) => write!(f, "ZonesLoaded(<error>)"),
            Outcome::ZonesTimedOut => write!(f, "ZonesTimedOut"),
            Outcome::PurgeCompleted(r) => write!(f, "PurgeCompleted({})", status(r)),
            Outcome::DefaultAccountSet(r) => write!(f, "DefaultAccountSet({})", status(r)),
            Outcome::AccountRemoved(r) => write!(f, "AccountRemoved({})", status(r)),
        }
    }
}
