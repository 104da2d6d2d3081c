use cfctl_config::{Account, AuthType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::action::Outcome;
use crate::screens::test_support::{ctx_with_accounts, zone};
use crate::screens::{DomainListScreen, MainMenuScreen, ZONES_TIMEOUT_MESSAGE};

fn press(app: &mut App, code: KeyCode) -> Vec<Tagged> {
    app.update(Action::Input(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn on_domains() -> (App, Vec<Tagged>) {
    let mut app = App::with_screen(MainMenuScreen::with_selected(3).into(), ctx_with_accounts(&["prod"]));
    let commands = press(&mut app, KeyCode::Enter);
    (app, commands)
}

fn domain_screen(app: &App) -> &DomainListScreen {
    match app.screen() {
        Screen::DomainList(screen) => screen,
        other => panic!("expected the domain list, got {other:?}"),
    }
}

#[test]
fn test_starts_on_welcome() {
    let mut app = App::new(ctx_with_accounts(&[]));
    assert_eq!(app.screen_kind(), ScreenKind::Welcome);
    assert!(app.start().is_empty());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen_kind(), ScreenKind::MainMenu);
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let (mut app, _) = on_domains();
    app.update(Action::Input(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(app.should_quit());
}

#[test]
fn test_switch_bumps_generation_and_tags_init_commands() {
    let (app, commands) = on_domains();
    assert_eq!(app.generation(), 1);
    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(|t| t.generation == 1));
    assert!(matches!(commands[0].command, Command::LoadZones));
    assert!(matches!(commands[1].command, Command::StartZonesTimeout(_)));
}

#[test]
fn test_stale_generation_is_dropped() {
    let (mut app, _) = on_domains();
    let commands = app.update(Action::Completed {
        generation: 0,
        outcome: Outcome::ZonesLoaded(Ok(vec![zone("example.com")])),
    });
    assert!(commands.is_empty());
    assert!(domain_screen(&app).is_loading());
}

#[test]
fn test_current_generation_is_delivered() {
    let (mut app, _) = on_domains();
    app.update(Action::Completed {
        generation: 1,
        outcome: Outcome::ZonesLoaded(Ok(vec![zone("example.com")])),
    });
    assert_eq!(domain_screen(&app).zones().len(), 1);
}

#[test]
fn test_timeout_then_late_load_for_same_visit() {
    let (mut app, _) = on_domains();
    app.update(Action::Completed {
        generation: 1,
        outcome: Outcome::ZonesTimedOut,
    });
    app.update(Action::Completed {
        generation: 1,
        outcome: Outcome::ZonesLoaded(Ok(vec![zone("example.com")])),
    });
    let screen = domain_screen(&app);
    assert_eq!(screen.error(), Some(ZONES_TIMEOUT_MESSAGE));
    assert!(screen.zones().is_empty());
}

#[test]
fn test_result_from_previous_visit_is_dropped_after_reload() {
    let (mut app, _) = on_domains();
    app.update(Action::Completed {
        generation: 1,
        outcome: Outcome::ZonesTimedOut,
    });
    let commands = press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.generation(), 2);
    assert!(commands.iter().all(|t| t.generation == 2));

    app.update(Action::Completed {
        generation: 1,
        outcome: Outcome::ZonesLoaded(Ok(vec![zone("example.com")])),
    });
    assert!(domain_screen(&app).is_loading());
}

#[test]
fn test_config_reload_replaces_snapshot() {
    let mut app = App::new(ctx_with_accounts(&[]));
    let mut config = app.context().config.clone();
    let mut account = Account::new("prod", None, AuthType::Token);
    account.default = true;
    config.accounts.push(account);
    app.update(Action::ConfigReloaded(config));
    assert_eq!(app.context().active_account(), Some("prod"));
}

#[test]
fn test_account_override_wins() {
    let mut ctx = ctx_with_accounts(&["prod", "staging"]);
    ctx.account_override = Some("staging".to_string());
    assert_eq!(ctx.active_account(), Some("staging"));
}

#[test]
fn test_override_cleared_follows_default() {
    let mut ctx = ctx_with_accounts(&["prod", "staging"]);
    ctx.account_override = Some("staging".to_string());
    let mut app = App::new(ctx);

    let commands = app.update(Action::AccountOverrideCleared);
    assert!(commands.is_empty());
    assert_eq!(app.context().account_override, None);
    assert_eq!(app.context().active_account(), Some("prod"));
}

#[test]
fn test_tick_advances_frame() {
    let mut app = App::new(ctx_with_accounts(&[]));
    app.update(Action::Tick);
    app.update(Action::Tick);
    assert_eq!(app.context().frame, 2);
}

#[test]
fn test_render_active_screen() {
    let app = App::with_screen(MainMenuScreen::new().into(), ctx_with_accounts(&["prod"]));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Account: prod"));
    assert!(text.contains("Manage Domains"));
}
