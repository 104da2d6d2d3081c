//! Account side effect tests.
//!
//! - Verify-and-save stores the secret and the account only after the API accepts it.
//! - Set-default and remove mutate the store and publish a config snapshot.
//! - Results carry the generation of the command that produced them.

mod common;

use cfctl::action::NewAccount;
use cfctl_config::AuthType;
use common::*;
use secrecy::ExposeSecret;
use wiremock::matchers::{header, method, path};

fn new_token_account(name: &str) -> NewAccount {
    NewAccount {
        name: name.to_string(),
        email: None,
        auth_type: AuthType::Token,
        secret: secret(TEST_TOKEN),
    }
}

fn snapshot_accounts(actions: &[Action]) -> Option<Vec<String>> {
    actions.iter().find_map(|a| match a {
        Action::ConfigReloaded(config) => {
            Some(config.accounts.iter().map(|a| a.name.clone()).collect())
        }
        _ => None,
    })
}

#[tokio::test]
async fn test_verify_and_save_success() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("verify/token_active.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(3, Command::VerifyAndSaveAccount(new_token_account("prod")))
        .await;

    let (generation, outcome) = SideEffectsTestHarness::completed(&actions);
    assert_eq!(generation, 3);
    assert!(matches!(outcome, Outcome::AccountVerified(Ok(()))));
    assert_eq!(snapshot_accounts(&actions), Some(vec!["prod".to_string()]));

    let stored = harness.credentials.get("prod").unwrap();
    assert_eq!(stored.expose_secret(), TEST_TOKEN);
    let store = harness.services.store.lock().await;
    assert!(store.get_account("prod").unwrap().default);
}

#[tokio::test]
async fn test_verify_forbidden_saves_nothing() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(load_fixture("verify/forbidden.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(1, Command::VerifyAndSaveAccount(new_token_account("prod")))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    let Outcome::AccountVerified(Err(message)) = outcome else {
        panic!("expected a verification failure, got {outcome:?}");
    };
    assert!(message.starts_with("credential verification failed: "));
    assert!(message.contains("forbidden"));
    assert!(!message.contains(TEST_TOKEN));

    assert!(snapshot_accounts(&actions).is_none());
    assert!(harness.credentials.is_empty());
    assert!(!harness.services.store.lock().await.config().has_accounts());
}

#[tokio::test]
async fn test_set_default_account() {
    let mut harness = SideEffectsTestHarness::new()
        .await
        .with_account("prod", TEST_TOKEN)
        .await
        .with_account("staging", TEST_TOKEN)
        .await;

    let actions = harness
        .handle_and_collect(2, Command::SetDefaultAccount("staging".to_string()))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    assert!(matches!(outcome, Outcome::DefaultAccountSet(Ok(ref name)) if name == "staging"));
    assert!(snapshot_accounts(&actions).is_some());
    let store = harness.services.store.lock().await;
    assert_eq!(store.default_account().unwrap().name, "staging");
}

#[tokio::test]
async fn test_set_default_with_closed_channel_still_saves() {
    let harness = SideEffectsTestHarness::new()
        .await
        .with_account("prod", TEST_TOKEN)
        .await
        .with_account("staging", TEST_TOKEN)
        .await;
    *harness.services.account_override.lock().await = Some("prod".to_string());
    let (tx, rx) = tokio::sync::mpsc::channel::<Action>(1);
    drop(rx);

    handle_side_effects(
        Tagged {
            generation: 1,
            command: Command::SetDefaultAccount("staging".to_string()),
        },
        harness.services.clone(),
        tx,
    )
    .await;
    harness.services.task_tracker.close();
    tokio::time::timeout(
        std::time::Duration::from_secs(5),
        harness.services.task_tracker.wait(),
    )
    .await
    .expect("task did not finish");

    assert_eq!(*harness.services.account_override.lock().await, None);
    let store = harness.services.store.lock().await;
    assert_eq!(store.default_account().unwrap().name, "staging");
}

#[tokio::test]
async fn test_set_default_unknown_account() {
    let mut harness = SideEffectsTestHarness::new()
        .await
        .with_account("prod", TEST_TOKEN)
        .await;

    let actions = harness
        .handle_and_collect(1, Command::SetDefaultAccount("ghost".to_string()))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    let Outcome::DefaultAccountSet(Err(message)) = outcome else {
        panic!("expected an error, got {outcome:?}");
    };
    assert!(message.contains("account not found"));
    assert!(snapshot_accounts(&actions).is_none());
}

#[tokio::test]
async fn test_remove_account_deletes_credential() {
    let mut harness = SideEffectsTestHarness::new()
        .await
        .with_account("prod", TEST_TOKEN)
        .await
        .with_account("staging", TEST_TOKEN)
        .await;

    let actions = harness
        .handle_and_collect(1, Command::RemoveAccount("prod".to_string()))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    assert!(matches!(outcome, Outcome::AccountRemoved(Ok(ref name)) if name == "prod"));
    assert_eq!(snapshot_accounts(&actions), Some(vec!["staging".to_string()]));
    assert!(harness.credentials.get("prod").unwrap_err().is_not_found());

    let store = harness.services.store.lock().await;
    assert_eq!(store.default_account().unwrap().name, "staging");
}

#[tokio::test]
async fn test_remove_account_without_credential_succeeds() {
    let mut harness = SideEffectsTestHarness::new()
        .await
        .with_account_without_secret("prod")
        .await;

    let actions = harness
        .handle_and_collect(1, Command::RemoveAccount("prod".to_string()))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    assert!(matches!(outcome, Outcome::AccountRemoved(Ok(_))));
    assert!(!harness.services.store.lock().await.config().has_accounts());
}

async fn mount_token_active(harness: &SideEffectsTestHarness) {
    Mock::given(method("GET"))
        .and(path("/user/tokens/verify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("verify/token_active.json")),
        )
        .mount(&harness.mock_server)
        .await;
}

#[tokio::test]
async fn test_verify_with_locked_keyring_saves_nothing() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_token_active(&harness).await;
    harness.credentials.set_unavailable(true);

    let actions = harness
        .handle_and_collect(1, Command::VerifyAndSaveAccount(new_token_account("prod")))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    let Outcome::AccountVerified(Err(message)) = outcome else {
        panic!("expected a store failure, got {outcome:?}");
    };
    assert!(message.starts_with("failed to store credential: "));
    assert!(snapshot_accounts(&actions).is_none());
    assert!(!harness.services.store.lock().await.config().has_accounts());
}

#[tokio::test]
async fn test_config_write_failure_discards_stored_credential() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_token_active(&harness).await;

    // A directory where the config file should be makes the atomic rename fail.
    let config_path = harness.services.store.lock().await.path().to_path_buf();
    std::fs::remove_file(&config_path).unwrap();
    std::fs::create_dir(&config_path).unwrap();
    std::fs::write(config_path.join("keep"), "").unwrap();

    let actions = harness
        .handle_and_collect(1, Command::VerifyAndSaveAccount(new_token_account("prod")))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    let Outcome::AccountVerified(Err(message)) = outcome else {
        panic!("expected a save failure, got {outcome:?}");
    };
    assert!(message.starts_with("failed to save account: "));
    assert!(harness.credentials.is_empty());
    assert!(!harness.services.store.lock().await.config().has_accounts());
}

#[tokio::test]
async fn test_remove_with_locked_keyring_keeps_account() {
    let mut harness = SideEffectsTestHarness::new()
        .await
        .with_account("prod", TEST_TOKEN)
        .await;
    harness.credentials.set_unavailable(true);

    let actions = harness
        .handle_and_collect(1, Command::RemoveAccount("prod".to_string()))
        .await;

    let (_, outcome) = SideEffectsTestHarness::completed(&actions);
    let Outcome::AccountRemoved(Err(message)) = outcome else {
        panic!("expected a delete failure, got {outcome:?}");
    };
    assert!(message.starts_with("failed to delete credential: "));
    assert!(snapshot_accounts(&actions).is_none());

    harness.credentials.set_unavailable(false);
    assert!(harness.credentials.get("prod").is_ok());
    let store = harness.services.store.lock().await;
    assert_eq!(store.get_account("prod").unwrap().name, "prod");
}
