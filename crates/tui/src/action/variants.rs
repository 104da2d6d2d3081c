//! Action, command, and outcome definitions.

use std::time::Duration;

use cfctl_client::{PurgeRequest, Zone};
use cfctl_config::{AuthType, Config};
use crossterm::event::KeyEvent;
use secrecy::SecretString;

/// Everything the driver reacts to.
///
/// Inputs come from the terminal event task and the tick interval; results
/// come from command tasks spawned by the runtime.
#[derive(Debug, Clone)]
pub enum Action {
    /// A key press.
    Input(KeyEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Animation tick.
    Tick,
    /// An async command finished. `generation` is the tag it was issued with.
    Completed { generation: u64, outcome: Outcome },
    /// The configuration changed on disk; carries the fresh snapshot.
    ///
    /// Not generation-gated: the snapshot is valid whatever screen is active.
    ConfigReloaded(Config),
    /// The `--account` override no longer applies; follow the default account.
    AccountOverrideCleared,
    /// Leave the application.
    Quit,
}

/// An account the user asked to verify and save.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    /// Present for key authentication only.
    pub email: Option<String>,
    pub auth_type: AuthType,
    pub secret: SecretString,
}

/// Work a screen asks the runtime to perform off the UI task.
#[derive(Debug, Clone)]
pub enum Command {
    /// Verify credentials against the API, store the secret, then upsert the account.
    VerifyAndSaveAccount(NewAccount),
    /// List every zone visible to the active account.
    LoadZones,
    /// Report `Outcome::ZonesTimedOut` after the given delay.
    StartZonesTimeout(Duration),
    /// Purge cache for a zone with the active account.
    Purge {
        zone_id: String,
        request: PurgeRequest,
    },
    /// Make the named account the default.
    SetDefaultAccount(String),
    /// Delete the account's secret and remove it from the configuration.
    RemoveAccount(String),
}

impl Command {
    /// Short static name for spans and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VerifyAndSaveAccount(_) => "verify_and_save_account",
            Self::LoadZones => "load_zones",
            Self::StartZonesTimeout(_) => "start_zones_timeout",
            Self::Purge { .. } => "purge",
            Self::SetDefaultAccount(_) => "set_default_account",
            Self::RemoveAccount(_) => "remove_account",
        }
    }
}

/// The typed result of a command.
///
/// Errors are carried as display strings, already classified and worded
/// for the screen that shows them.
#[derive(Debug, Clone)]
pub enum Outcome {
    AccountVerified(Result<(), String>),
    ZonesLoaded(Result<Vec<Zone>, String>),
    ZonesTimedOut,
    PurgeCompleted(Result<(), String>),
    /// Carries the new default account's name on success.
    DefaultAccountSet(Result<String, String>),
    /// Carries the removed account's name on success.
    AccountRemoved(Result<String, String>),
}

/// A command tagged with the generation of the screen that issued it.
#[derive(Debug, Clone)]
pub struct Tagged {
    pub generation: u64,
    pub command: Command,
}
