//! Keyboard shortcuts, authentication methods, and capabilities.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Event, MainMenuScreen, Screen, ScreenState, Transition};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::{Theme, render_footer, render_header, screen_areas};

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑/↓ or k/j", "Navigate"),
    ("Enter", "Select / Confirm"),
    ("/", "Filter lists"),
    ("Esc", "Back"),
    ("q", "Quit (from menus)"),
    ("Tab", "Next field"),
    ("Ctrl+S", "Submit purge"),
    ("Ctrl+C", "Quit from anywhere"),
];

const AUTH_METHODS: &[(&str, &str)] = &[
    ("API Token", "Recommended. Scoped permissions, e.g. Zone.Zone.Read + Zone.Cache Purge"),
    ("Global Key", "Legacy. Full account access; requires the account email"),
];

const CAPABILITIES: &[&str] = &[
    "Manage multiple Cloudflare accounts",
    "Browse and filter zones",
    "Purge cache by URL, hostname, tag, or prefix",
    "Purge everything with a typed confirmation",
];

/// Help screen; returns to the screen that opened it.
#[derive(Debug, Default)]
pub struct HelpScreen {
    return_to: Option<Box<Screen>>,
}

impl HelpScreen {
    pub fn new(return_to: Option<Screen>) -> Self {
        Self {
            return_to: return_to.map(Box::new),
        }
    }
}

fn pairs<'a>(items: &'a [(&'a str, &'a str)], theme: &Theme) -> Vec<Line<'a>> {
    items
        .iter()
        .map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.key_hint()),
                Span::styled(*text, theme.text()),
            ])
        })
        .collect()
}

impl ScreenState for HelpScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        let Event::Key(key) = event else {
            return Transition::none();
        };
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) || is_char(&key, 'q') {
            return match self.return_to.take() {
                Some(screen) => Transition::Switch(screen),
                None => Transition::to(MainMenuScreen::new()),
            };
        }
        Transition::none()
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Help", ctx.active_account(), theme);

        let mut lines = vec![Line::from(Span::styled("Keyboard Shortcuts", theme.title()))];
        lines.extend(pairs(SHORTCUTS, theme));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Authentication", theme.title())));
        lines.extend(pairs(AUTH_METHODS, theme));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Capabilities", theme.title())));
        lines.extend(
            CAPABILITIES
                .iter()
                .map(|c| Line::from(Span::styled(format!("  • {c}"), theme.text()))),
        );

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            ),
            areas.body,
        );
        render_footer(f, areas.footer, &[("Esc", "Back")], theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{ctx_with_accounts, into_screen, key, render_text, switched_to};
    use crate::screens::{MainMenuScreen, ScreenKind};

    #[test]
    fn test_returns_to_caller() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut help = HelpScreen::new(Some(MainMenuScreen::with_selected(5).into()));
        let Screen::MainMenu(menu) = into_screen(help.handle_event(key(KeyCode::Esc), &ctx)) else {
            panic!("expected the main menu");
        };
        assert_eq!(menu.selected_item(), crate::screens::MenuItem::Help);
    }

    #[test]
    fn test_defaults_to_main_menu() {
        let ctx = ctx_with_accounts(&["prod"]);
        let t = HelpScreen::new(None).handle_event(key(KeyCode::Char('q')), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::MainMenu));
    }

    #[test]
    fn test_render_lists_auth_methods() {
        let ctx = ctx_with_accounts(&["prod"]);
        let text = render_text(&HelpScreen::new(None), &ctx);
        assert!(text.contains("API Token"));
        assert!(text.contains("Recommended"));
        assert!(text.contains("Ctrl+S"));
    }
}
