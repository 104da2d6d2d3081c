//! cfctl: interactive terminal client for the Cloudflare CDN API.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, and the terminal.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Screen behavior (see `cfctl::screens`).
//! - Async API calls (see `runtime::side_effects`).
//! - Configuration persistence (see `cfctl_config`).
//!
//! Invariants:
//! - `dotenvy::dotenv()` runs before argument parsing so `.env` can supply `CFCTL_*`,
//!   unless `DOTENV_DISABLED` is `1` or `true`.
//! - A configuration that fails to load exits with code 1 before the terminal is touched.
//! - The logging guard lives for the whole of `main`.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use cfctl::action::{Action, RedactedAction};
use cfctl::app::{App, Context};
use cfctl::cli::Cli;
use cfctl::runtime::{
    logging,
    side_effects::{Services, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use cfctl::ui::Theme;
use cfctl_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use cfctl_config::{
    ConfigStore, KeyringCredentialStore, api_base_url_override, default_log_dir,
    resolve_config_path,
};
use clap::Parser;
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Mutex, mpsc::channel};

/// How long to wait for in-flight tasks on exit.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> ExitCode {
    if !matches!(std::env::var("DOTENV_DISABLED").as_deref(), Ok("1" | "true")) {
        let _ = dotenvy::dotenv();
    }
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    let _log_guard = match logging::init(&log_dir, cli.debug, cli.quiet) {
        Ok(guard) => Some(guard),
        Err(e) => {
            if !cli.quiet {
                eprintln!("warning: logging disabled: {e:#}");
            }
            None
        }
    };

    let quiet = cli.quiet;
    match session(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "cfctl exited with an error");
            if !quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn session(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.clone())?;
    let store = ConfigStore::load(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;
    tracing::info!(
        path = %config_path.display(),
        accounts = store.config().accounts.len(),
        "Configuration loaded"
    );

    let config = store.config().clone();
    if let Some(name) = cli.account.as_deref() {
        config
            .account(name)
            .with_context(|| format!("unknown account '{name}'"))?;
    }

    let theme = Theme::resolve(&config.defaults.theme, config.ui.colors && !cli.no_color);
    let ctx = Context::new(config, config_path, theme, cli.account.clone());

    let task_tracker = TaskTracker::new();
    let services = Services {
        store: Arc::new(Mutex::new(store)),
        credentials: Arc::new(KeyringCredentialStore::new()),
        account_override: Arc::new(Mutex::new(cli.account.clone())),
        api_base_url: api_base_url_override(),
        task_tracker: task_tracker.clone(),
    };

    let guard = TerminalGuard::enter().context("failed to initialize terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Not tracked: it only ends when stdin closes, so it is aborted on exit.
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let action = match event {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal input stream failed");
                    break;
                }
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(ctx);
    for tagged in app.start() {
        handle_side_effects(tagged, services.clone(), tx.clone()).await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        let action = tokio::select! {
            Some(action) = rx.recv() => action,
            _ = tick_interval.tick() => Action::Tick,
        };
        if !matches!(action, Action::Tick) {
            tracing::debug!(action = ?RedactedAction(&action), "Handling action");
        }

        for tagged in app.update(action) {
            handle_side_effects(tagged, services.clone(), tx.clone()).await;
        }
        if app.should_quit() {
            tracing::info!("Quit requested");
            break Ok(());
        }
    };

    input_task.abort();
    task_tracker.close();
    if tokio::time::timeout(SHUTDOWN_GRACE, task_tracker.wait())
        .await
        .is_err()
    {
        tracing::debug!("Abandoning in-flight tasks on exit");
    }

    terminal.show_cursor()?;
    drop(guard);
    result
}
