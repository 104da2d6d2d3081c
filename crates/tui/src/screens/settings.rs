//! Read-only view of the effective configuration.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Event, MainMenuScreen, ScreenState, Transition};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::{Theme, render_footer, render_header, screen_areas};

#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsScreen;

impl SettingsScreen {
    pub fn new() -> Self {
        Self
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}

fn section<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(title, theme.title()))
}

fn entry(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<16}"), theme.text_dim()),
        Span::styled(value, theme.text()),
    ])
}

impl ScreenState for SettingsScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        match event {
            Event::Key(key)
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) || is_char(&key, 'q') =>
            {
                Transition::to(MainMenuScreen::new())
            }
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let config = &ctx.config;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Settings", ctx.active_account(), theme);

        let default_account = match config.default_account() {
            Ok(account) => account.name.clone(),
            Err(_) => "(none)".to_string(),
        };
        let lines = vec![
            section("General", theme),
            entry("Config file", ctx.config_path.display().to_string(), theme),
            entry("Default account", default_account, theme),
            entry("Theme", config.defaults.theme.clone(), theme),
            entry("Output", config.defaults.output.clone(), theme),
            Line::default(),
            section("API", theme),
            entry("Timeout", format!("{}s", config.api.timeout_duration().as_secs()), theme),
            entry("Retries", config.api.effective_retries().to_string(), theme),
            Line::default(),
            section("UI", theme),
            entry("Confirmations", on_off(config.ui.confirmations).to_string(), theme),
            entry("Animations", on_off(config.ui.animations).to_string(), theme),
            entry("Colors", on_off(config.ui.colors).to_string(), theme),
            Line::default(),
            section("Cache", theme),
            entry("Domains TTL", format!("{}s", config.cache.domains_ttl), theme),
            entry("Enabled", on_off(config.cache.enabled).to_string(), theme),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(" Configuration "),
            ),
            areas.body,
        );
        render_footer(f, areas.footer, &[("Esc", "Back")], theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenKind;
    use crate::screens::test_support::{ctx_with_accounts, key, render_text, switched_to};

    #[test]
    fn test_render_shows_sections_and_values() {
        let ctx = ctx_with_accounts(&["prod"]);
        let text = render_text(&SettingsScreen::new(), &ctx);
        assert!(text.contains("/tmp/cfctl/config.yaml"));
        assert!(text.contains("Default account prod"));
        assert!(text.contains("Timeout         30s"));
        assert!(text.contains("Domains TTL     300s"));
    }

    #[test]
    fn test_render_without_accounts() {
        let ctx = ctx_with_accounts(&[]);
        assert!(render_text(&SettingsScreen::new(), &ctx).contains("(none)"));
    }

    #[test]
    fn test_exit_keys_return_to_menu() {
        let ctx = ctx_with_accounts(&["prod"]);
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
            let t = SettingsScreen::new().handle_event(key(code), &ctx);
            assert_eq!(switched_to(&t), Some(ScreenKind::MainMenu));
        }
    }
}
