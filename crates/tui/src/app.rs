//! The screen driver.
//!
//! Responsibilities:
//! - Own the active `Screen` and the read-only `Context`.
//! - Translate `Action`s into screen events and apply the returned `Transition`.
//! - Tag every issued command with the current generation.
//!
//! Does NOT handle:
//! - Executing commands (see `crate::runtime::side_effects`).
//! - Terminal setup or the event loop (see `main.rs`).
//!
//! Invariants:
//! - The generation is bumped on every screen switch, before the new screen's `init`.
//! - A `Completed` action whose generation does not match is dropped.
//! - Ctrl+C quits from any screen.

mod context;

pub use context::Context;

use ratatui::Frame;

use crate::action::{Action, Command, Tagged};
use crate::input::is_quit_chord;
use crate::screens::{Event, Screen, ScreenKind, Transition, WelcomeScreen};

/// Application state: the active screen plus the driver bookkeeping.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    generation: u64,
    ctx: Context,
    should_quit: bool,
}

impl App {
    /// Start on the welcome screen.
    pub fn new(ctx: Context) -> Self {
        Self::with_screen(WelcomeScreen::new().into(), ctx)
    }

    pub fn with_screen(screen: Screen, ctx: Context) -> Self {
        Self {
            screen,
            generation: 0,
            ctx,
            should_quit: false,
        }
    }

    /// Run the initial screen's `init` and return its tagged commands.
    pub fn start(&mut self) -> Vec<Tagged> {
        let commands = self.screen.init(&self.ctx);
        self.tag(commands)
    }

    /// Apply one action. Returns the commands the runtime should execute.
    pub fn update(&mut self, action: Action) -> Vec<Tagged> {
        match action {
            Action::Input(key) if is_quit_chord(&key) => {
                self.should_quit = true;
                Vec::new()
            }
            Action::Input(key) => self.dispatch(Event::Key(key)),
            Action::Resize(width, height) => self.dispatch(Event::Resize(width, height)),
            Action::Tick => {
                self.ctx.frame = self.ctx.frame.wrapping_add(1);
                self.dispatch(Event::Tick)
            }
            Action::Completed {
                generation,
                outcome,
            } => {
                if generation != self.generation {
                    tracing::debug!(
                        generation,
                        current = self.generation,
                        "Discarding stale result"
                    );
                    return Vec::new();
                }
                self.dispatch(Event::Outcome(outcome))
            }
            Action::ConfigReloaded(config) => {
                tracing::debug!(accounts = config.accounts.len(), "Config snapshot refreshed");
                self.ctx.config = config;
                Vec::new()
            }
            Action::AccountOverrideCleared => {
                self.ctx.account_override = None;
                Vec::new()
            }
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    fn dispatch(&mut self, event: Event) -> Vec<Tagged> {
        match self.screen.handle_event(event, &self.ctx) {
            Transition::Stay(commands) => self.tag(commands),
            Transition::Switch(next) => {
                let from = self.screen.kind();
                self.screen = *next;
                self.generation += 1;
                tracing::debug!(
                    from = ?from,
                    to = ?self.screen.kind(),
                    generation = self.generation,
                    "Screen switch"
                );
                let commands = self.screen.init(&self.ctx);
                self.tag(commands)
            }
            Transition::Quit => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    fn tag(&self, commands: Vec<Command>) -> Vec<Tagged> {
        commands
            .into_iter()
            .map(|command| Tagged {
                generation: self.generation,
                command,
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame) {
        self.screen.render(f, f.area(), &self.ctx);
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests;
