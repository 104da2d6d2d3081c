//! Common test utilities for TUI side effects tests.
//!
//! This module provides a harness for exercising the runtime's side effect
//! handlers against a wiremock server, a temporary config file, and an
//! in-memory credential store.
//!
//! # Invariants
//! - Each harness gets its own mock server, config directory, and action channel.
//! - Fixtures are loaded from the client crate's `fixtures/` directory.
//!
//! # What this does NOT handle
//! - The OS keyring (`MemoryCredentialStore` stands in for it).
//! - Terminal management.

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cfctl_config::{Account, AuthType, ConfigStore, MemoryCredentialStore};
use secrecy::SecretString;
use tempfile::TempDir;
use tokio::sync::{Mutex, mpsc};

pub use cfctl::action::{Action, Command, Outcome, Tagged};
pub use cfctl::runtime::side_effects::{Services, TaskTracker, handle_side_effects};
pub use cfctl_config::CredentialStore;
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A 45-character API token.
pub const TEST_TOKEN: &str = "abcdefghij0123456789abcdefghij0123456789abcde";

/// Load a JSON fixture from the client crate's fixtures directory.
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("No parent directory")
        .join("client")
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub services: Services,
    pub credentials: Arc<MemoryCredentialStore>,
    _config_dir: TempDir,
}

impl SideEffectsTestHarness {
    /// Create a harness with an empty configuration.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);

        let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = ConfigStore::load(config_dir.path().join("config.yaml"))
            .expect("Failed to create config store");
        let credentials = Arc::new(MemoryCredentialStore::new());

        let services = Services {
            store: Arc::new(Mutex::new(store)),
            credentials: credentials.clone(),
            account_override: Arc::default(),
            api_base_url: Some(mock_server.uri()),
            task_tracker: TaskTracker::new(),
        };

        Self {
            mock_server,
            action_rx,
            action_tx,
            services,
            credentials,
            _config_dir: config_dir,
        }
    }

    /// Add a token account with a stored secret.
    pub async fn with_account(self, name: &str, token: &str) -> Self {
        self.credentials
            .store(name, &secret(token))
            .expect("Failed to store credential");
        self.services
            .store
            .lock()
            .await
            .add_account(Account::new(name, None, AuthType::Token))
            .expect("Failed to add account");
        self
    }

    /// Add an account whose secret is missing from the credential store.
    pub async fn with_account_without_secret(self, name: &str) -> Self {
        self.services
            .store
            .lock()
            .await
            .add_account(Account::new(name, None, AuthType::Token))
            .expect("Failed to add account");
        self
    }

    /// Dispatch a command and collect actions until its `Completed` arrives.
    ///
    /// Panics if `handle_side_effects` blocks instead of spawning.
    pub async fn handle_and_collect(&mut self, generation: u64, command: Command) -> Vec<Action> {
        let tagged = Tagged {
            generation,
            command,
        };
        let handle_future =
            handle_side_effects(tagged, self.services.clone(), self.action_tx.clone());
        if tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be blocking instead of spawning tasks");
        }

        let mut actions = Vec::new();
        loop {
            let action = self.expect_action(5_000).await;
            let done = matches!(action, Action::Completed { .. });
            actions.push(action);
            if done {
                return actions;
            }
        }
    }

    /// The `Completed` outcome among `actions`, with its generation.
    pub fn completed(actions: &[Action]) -> (u64, Outcome) {
        actions
            .iter()
            .find_map(|a| match a {
                Action::Completed {
                    generation,
                    outcome,
                } => Some((*generation, outcome.clone())),
                _ => None,
            })
            .expect("No Completed action")
    }

    /// Expect a specific action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv())
            .await
            .expect("Timeout waiting for action")
            .expect("Channel closed while waiting for action")
    }

    /// Drain all pending actions from the channel.
    pub async fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(Some(action)) =
            tokio::time::timeout(Duration::from_millis(10), self.action_rx.recv()).await
        {
            actions.push(action);
        }
        actions
    }
}
