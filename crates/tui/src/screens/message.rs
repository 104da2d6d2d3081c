//! Generic modal message with a level-colored border.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Event, MainMenuScreen, Screen, ScreenState, Transition};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::{Theme, centered_rect, render_footer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    fn style(self, theme: &Theme) -> ratatui::style::Style {
        match self {
            Self::Info => theme.info(),
            Self::Success => theme.success(),
            Self::Warning => theme.warning(),
            Self::Error => theme.error(),
        }
    }
}

/// A titled message that returns to the screen that raised it.
pub struct MessageScreen {
    level: MessageLevel,
    title: String,
    body: String,
    return_to: Option<Box<Screen>>,
}

impl MessageScreen {
    pub fn new(level: MessageLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            return_to: None,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, title, body)
    }

    /// Return to `screen` when dismissed. Without this, the main menu is used.
    pub fn returning_to(mut self, screen: impl Into<Screen>) -> Self {
        self.return_to = Some(Box::new(screen.into()));
        self
    }

    pub fn level(&self) -> MessageLevel {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl ScreenState for MessageScreen {
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
        let style = self.level.style(theme);
        let popup = centered_rect(60, 9, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(
                format!(" {} {} ", self.level.icon(), self.title),
                style,
            ));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(self.body.clone(), theme.text())))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
        render_footer(f, footer, &[("Enter", "Continue")], theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenKind;
    use crate::screens::test_support::{ctx_with_accounts, key, render_text, switched_to};

    #[test]
    fn test_dismiss_without_return_goes_to_main_menu() {
        let ctx = ctx_with_accounts(&[]);
        let mut screen = MessageScreen::info("Note", "hello");
        let t = screen.handle_event(key(KeyCode::Enter), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::MainMenu));
    }

    #[test]
    fn test_dismiss_returns_to_caller() {
        let ctx = ctx_with_accounts(&[]);
        let mut screen =
            MessageScreen::warning("Careful", "body").returning_to(crate::screens::HelpScreen::new(None));
        let t = screen.handle_event(key(KeyCode::Char('q')), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::Help));
    }

    #[test]
    fn test_other_keys_stay() {
        let ctx = ctx_with_accounts(&[]);
        let mut screen = MessageScreen::error("Oops", "body");
        let t = screen.handle_event(key(KeyCode::Char('x')), &ctx);
        assert!(matches!(t, Transition::Stay(ref c) if c.is_empty()));
    }

    #[test]
    fn test_render_shows_title_and_body() {
        let ctx = ctx_with_accounts(&[]);
        let screen = MessageScreen::success("Success", "Default account set to: prod");
        let text = render_text(&screen, &ctx);
        assert!(text.contains("Success"));
        assert!(text.contains("Default account set to: prod"));
    }
}
