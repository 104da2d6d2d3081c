//! Entry splash screen.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Event, MainMenuScreen, ScreenState, Transition};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::centered_rect;

/// Splash with a blinking continue prompt.
#[derive(Debug, Clone)]
pub struct WelcomeScreen {
    prompt_visible: bool,
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeScreen {
    pub fn new() -> Self {
        Self {
            prompt_visible: true,
        }
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }
}

impl ScreenState for WelcomeScreen {
    fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition {
        match event {
            Event::Tick => {
                if ctx.config.ui.animations {
                    self.prompt_visible = !self.prompt_visible;
                }
                Transition::none()
            }
            Event::Key(key) if matches!(key.code, KeyCode::Enter) || is_char(&key, ' ') => {
                Transition::to(MainMenuScreen::new())
            }
            Event::Key(key) if is_char(&key, 'q') => Transition::Quit,
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let accounts = ctx.config.accounts.len();

        let status = if accounts > 0 {
            vec![Line::from(vec![
                Span::styled("✓ Ready", theme.success()),
                Span::styled(format!(" • Accounts: {accounts}"), theme.text_dim()),
            ])]
        } else {
            vec![
                Line::from(Span::styled("⚠ No accounts configured", theme.warning())),
                Line::from(Span::styled(
                    "Configure your Cloudflare account to get started",
                    theme.text_dim(),
                )),
            ]
        };

        let prompt = if self.prompt_visible {
            Line::from(vec![
                Span::styled("Enter", theme.key_hint()),
                Span::styled(" to continue  •  ", theme.text_dim()),
                Span::styled("q", theme.key_hint()),
                Span::styled(" to quit", theme.text_dim()),
            ])
        } else {
            Line::from("")
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("[ CFCTL ]", theme.title()),
                Span::styled(format!("  v{}", env!("CARGO_PKG_VERSION")), theme.text_dim()),
            ]),
            Line::from(Span::styled("Cloudflare CLI Management Tool", theme.text())),
            Line::from(""),
            Line::from(Span::styled(
                "An interactive terminal client for managing Cloudflare zones and cache",
                theme.text_dim(),
            )),
            Line::from(""),
        ];
        lines.extend(status);
        lines.push(Line::from(""));
        lines.push(prompt);

        let panel = centered_rect(76, lines.len() as u16 + 2, area);
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
        f.render_widget(widget, panel);
    }
}
