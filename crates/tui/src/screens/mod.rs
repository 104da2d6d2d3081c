//! The screen state machine.
//!
//! Responsibilities:
//! - Define `Screen`, one variant per full-frame state, each wrapping its own struct.
//! - Define the `ScreenState` contract every screen implements:
//!   `init` (entry commands), `handle_event` (transition function), `render`.
//! - Define `Transition`, the result of every event.
//!
//! Does NOT handle:
//! - Executing commands (see `crate::runtime::side_effects`).
//! - Generation tagging or stale-result filtering (see `crate::app::App`).
//!
//! Invariants:
//! - `handle_event` performs no I/O; side effects leave only as `Command`s.
//! - `render` never mutates screen state.
//! - Screens read configuration only through the `Context` snapshot.

mod account_config;
mod account_remove;
mod account_select;
mod domain_list;
mod filter_list;
mod help;
mod main_menu;
mod message;
mod purge_everything;
mod purge_form;
mod purge_menu;
mod settings;
mod welcome;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::{Command, Outcome};
use crate::app::Context;

pub use account_config::{AccountConfigScreen, ConfigStep};
pub use account_remove::{AccountRemoveScreen, RemovePhase};
pub use account_select::AccountSelectScreen;
pub use domain_list::{DomainListScreen, NO_ZONES_MESSAGE, ZONES_TIMEOUT_MESSAGE};
pub use filter_list::{FilterList, ListKey};
pub use help::HelpScreen;
pub use main_menu::{MainMenuScreen, MenuItem};
pub use message::{MessageLevel, MessageScreen};
pub use purge_everything::{EverythingStep, PurgeEverythingScreen};
pub use purge_form::{PurgeFormScreen, PurgeKind};
pub use purge_menu::{PurgeChoice, PurgeMenuScreen};
pub use settings::SettingsScreen;
pub use welcome::WelcomeScreen;

/// An input to a screen's transition function.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// The result of a command this screen issued.
    Outcome(Outcome),
}

/// What the driver should do after a screen handled an event.
pub enum Transition {
    /// Keep the current screen and run these commands.
    Stay(Vec<Command>),
    /// Replace the current screen; the driver then runs the new screen's `init`.
    Switch(Box<Screen>),
    Quit,
}

impl Transition {
    /// Stay without issuing commands.
    pub fn none() -> Self {
        Self::Stay(Vec::new())
    }

    /// Stay and issue a single command.
    pub fn command(command: Command) -> Self {
        Self::Stay(vec![command])
    }

    /// Switch to `screen`.
    pub fn to(screen: impl Into<Screen>) -> Self {
        Self::Switch(Box::new(screen.into()))
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stay(commands) => write!(f, "Stay(<{} commands>)", commands.len()),
            Self::Switch(screen) => write!(f, "Switch({:?})", screen.kind()),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

/// The behavior every screen provides.
pub trait ScreenState {
    /// Commands to issue once on entry.
    fn init(&mut self, _ctx: &Context) -> Vec<Command> {
        Vec::new()
    }

    /// The transition function.
    fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition;

    /// Draw the screen into `area`.
    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context);
}

/// Identifies a screen without its state, for tests and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Welcome,
    MainMenu,
    AccountConfig,
    AccountSelect,
    AccountRemove,
    DomainList,
    PurgeMenu,
    PurgeForm,
    PurgeEverything,
    Settings,
    Help,
    Message,
}

/// The active full-frame state.
pub enum Screen {
    Welcome(WelcomeScreen),
    MainMenu(MainMenuScreen),
    AccountConfig(AccountConfigScreen),
    AccountSelect(AccountSelectScreen),
    AccountRemove(AccountRemoveScreen),
    DomainList(DomainListScreen),
    PurgeMenu(PurgeMenuScreen),
    PurgeForm(PurgeFormScreen),
    PurgeEverything(PurgeEverythingScreen),
    Settings(SettingsScreen),
    Help(HelpScreen),
    Message(MessageScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Welcome(_) => ScreenKind::Welcome,
            Self::MainMenu(_) => ScreenKind::MainMenu,
            Self::AccountConfig(_) => ScreenKind::AccountConfig,
            Self::AccountSelect(_) => ScreenKind::AccountSelect,
            Self::AccountRemove(_) => ScreenKind::AccountRemove,
            Self::DomainList(_) => ScreenKind::DomainList,
            Self::PurgeMenu(_) => ScreenKind::PurgeMenu,
            Self::PurgeForm(_) => ScreenKind::PurgeForm,
            Self::PurgeEverything(_) => ScreenKind::PurgeEverything,
            Self::Settings(_) => ScreenKind::Settings,
            Self::Help(_) => ScreenKind::Help,
            Self::Message(_) => ScreenKind::Message,
        }
    }

    fn state(&self) -> &dyn ScreenState {
        match self {
            Self::Welcome(s) => s,
            Self::MainMenu(s) => s,
            Self::AccountConfig(s) => s,
            Self::AccountSelect(s) => s,
            Self::AccountRemove(s) => s,
            Self::DomainList(s) => s,
            Self::PurgeMenu(s) => s,
            Self::PurgeForm(s) => s,
            Self::PurgeEverything(s) => s,
            Self::Settings(s) => s,
            Self::Help(s) => s,
            Self::Message(s) => s,
        }
    }

    fn state_mut(&mut self) -> &mut dyn ScreenState {
        match self {
            Self::Welcome(s) => s,
            Self::MainMenu(s) => s,
            Self::AccountConfig(s) => s,
            Self::AccountSelect(s) => s,
            Self::AccountRemove(s) => s,
            Self::DomainList(s) => s,
            Self::PurgeMenu(s) => s,
            Self::PurgeForm(s) => s,
            Self::PurgeEverything(s) => s,
            Self::Settings(s) => s,
            Self::Help(s) => s,
            Self::Message(s) => s,
        }
    }

    pub fn init(&mut self, ctx: &Context) -> Vec<Command> {
        self.state_mut().init(ctx)
    }

    pub fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition {
        self.state_mut().handle_event(event, ctx)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        self.state().render(f, area, ctx)
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Screen::{:?}", self.kind())
    }
}

macro_rules! impl_from_screen {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Screen {
                fn from(screen: $ty) -> Self {
                    Screen::$variant(screen)
                }
            }
        )*
    };
}

impl_from_screen! {
    Welcome => WelcomeScreen,
    MainMenu => MainMenuScreen,
    AccountConfig => AccountConfigScreen,
    AccountSelect => AccountSelectScreen,
    AccountRemove => AccountRemoveScreen,
    DomainList => DomainListScreen,
    PurgeMenu => PurgeMenuScreen,
    PurgeForm => PurgeFormScreen,
    PurgeEverything => PurgeEverythingScreen,
    Settings => SettingsScreen,
    Help => HelpScreen,
    Message => MessageScreen,
}
