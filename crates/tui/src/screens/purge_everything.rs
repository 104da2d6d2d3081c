//! Purge everything, guarded by a warning and a typed zone-name confirmation.

use cfctl_client::{PurgeRequest, Zone};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Event, PurgeMenuScreen, ScreenState, Transition};
use crate::action::{Command, Outcome};
use crate::app::Context;
use crate::input::{SingleLineInput, is_char};
use crate::ui::theme::spinner_char;
use crate::ui::{render_footer, render_header, screen_areas};

pub(crate) const NAME_MISMATCH: &str = "domain name doesn't match";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EverythingStep {
    Warn,
    Confirm,
    Purging,
    Done,
}

#[derive(Debug, Clone)]
pub struct PurgeEverythingScreen {
    zone: Zone,
    step: EverythingStep,
    confirmation: SingleLineInput,
    error: Option<String>,
}

impl PurgeEverythingScreen {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            step: EverythingStep::Warn,
            confirmation: SingleLineInput::new(),
            error: None,
        }
    }

    pub fn step(&self) -> EverythingStep {
        self.step
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn back(&self) -> Transition {
        Transition::to(PurgeMenuScreen::new(self.zone.clone()))
    }

    fn handle_confirm_key(&mut self, key: crossterm::event::KeyEvent) -> Transition {
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Enter => {
                // Exact match: no trimming, no case folding.
                if self.confirmation.value() != self.zone.name {
                    self.error = Some(NAME_MISMATCH.to_string());
                    return Transition::none();
                }
                self.error = None;
                self.step = EverythingStep::Purging;
                tracing::warn!(zone = %self.zone.name, "Purging entire cache");
                Transition::command(Command::Purge {
                    zone_id: self.zone.id.clone(),
                    request: PurgeRequest::Everything,
                })
            }
            _ => {
                self.confirmation.handle_key(key);
                Transition::none()
            }
        }
    }
}

impl ScreenState for PurgeEverythingScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        match (self.step, event) {
            (EverythingStep::Purging, Event::Outcome(Outcome::PurgeCompleted(result))) => {
                match result {
                    Ok(()) => self.step = EverythingStep::Done,
                    Err(message) => {
                        self.step = EverythingStep::Confirm;
                        self.error = Some(message);
                    }
                }
                Transition::none()
            }
            (EverythingStep::Warn, Event::Key(key)) => {
                if key.code == KeyCode::Enter || is_char(&key, 'y') || is_char(&key, 'Y') {
                    self.step = EverythingStep::Confirm;
                    Transition::none()
                } else if key.code == KeyCode::Esc || is_char(&key, 'n') || is_char(&key, 'N') {
                    self.back()
                } else {
                    Transition::none()
                }
            }
            (EverythingStep::Confirm, Event::Key(key)) => self.handle_confirm_key(key),
            (EverythingStep::Done, Event::Key(_)) => self.back(),
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(
            f,
            areas.header,
            &format!("Purge Everything: {}", self.zone.name),
            ctx.active_account(),
            theme,
        );

        let [body, input, status] = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(areas.body);

        let warning = vec![
            Line::from(Span::styled("⚠ WARNING", theme.warning())),
            Line::from(Span::styled(
                format!("This will purge ALL cached content for {}.", self.zone.name),
                theme.text(),
            )),
            Line::from(Span::styled(
                "Your origin may see a spike in traffic while the cache refills.",
                theme.text_dim(),
            )),
        ];
        f.render_widget(
            Paragraph::new(warning)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.warning()),
                ),
            body,
        );

        let hints: &[(&str, &str)] = match self.step {
            EverythingStep::Warn => {
                f.render_widget(
                    Paragraph::new(Span::styled("Continue? (y/n)", theme.text())),
                    input,
                );
                &[("y", "Continue"), ("n", "Cancel")]
            }
            EverythingStep::Confirm => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(format!(" Type {} to confirm ", self.zone.name));
                let inner = block.inner(input);
                f.render_widget(
                    Paragraph::new(self.confirmation.value()).style(theme.text()).block(block),
                    input,
                );
                f.set_cursor_position((
                    inner.x + self.confirmation.cursor_position() as u16,
                    inner.y,
                ));
                &[("Enter", "Purge"), ("Esc", "Cancel")]
            }
            EverythingStep::Purging => {
                f.render_widget(
                    Paragraph::new(Span::styled(
                        format!("{} Purging entire cache...", spinner_char(ctx.frame)),
                        theme.info(),
                    )),
                    input,
                );
                &[]
            }
            EverythingStep::Done => {
                f.render_widget(
                    Paragraph::new(Span::styled(
                        format!("✓ Entire cache purged for {}", self.zone.name),
                        theme.success(),
                    )),
                    input,
                );
                &[("any key", "Continue")]
            }
        };

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(Span::styled(format!("✗ {error}"), theme.error()))
                    .wrap(Wrap { trim: true }),
                status,
            );
        }
        render_footer(f, areas.footer, hints, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{
        chars, ctx_with_accounts, feed, key, render_text, switched_to, zone,
    };
    use crate::screens::ScreenKind;

    fn confirming(ctx: &Context) -> PurgeEverythingScreen {
        let mut screen = PurgeEverythingScreen::new(zone("example.com"));
        screen.handle_event(key(KeyCode::Char('y')), ctx);
        screen
    }

    #[test]
    fn test_warn_then_confirm() {
        let ctx = ctx_with_accounts(&["prod"]);
        assert_eq!(confirming(&ctx).step(), EverythingStep::Confirm);
    }

    #[test]
    fn test_n_cancels_from_warning() {
        let ctx = ctx_with_accounts(&["prod"]);
        let t = PurgeEverythingScreen::new(zone("example.com"))
            .handle_event(key(KeyCode::Char('n')), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::PurgeMenu));
    }

    #[test]
    fn test_exact_name_issues_purge_everything() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = confirming(&ctx);
        let mut events = chars("example.com");
        events.push(key(KeyCode::Enter));
        let Transition::Stay(commands) = feed(&mut screen, events, &ctx) else {
            panic!("expected a command");
        };
        assert!(matches!(
            commands.as_slice(),
            [Command::Purge { zone_id, request: PurgeRequest::Everything }] if zone_id == "id-example.com"
        ));
        assert_eq!(screen.step(), EverythingStep::Purging);
    }

    #[test]
    fn test_mismatch_stays_with_error() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = confirming(&ctx);
        let mut events = chars("Example.com");
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx);
        assert_eq!(screen.step(), EverythingStep::Confirm);
        assert_eq!(screen.error(), Some(NAME_MISMATCH));
    }

    #[test]
    fn test_trailing_space_is_a_mismatch() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = confirming(&ctx);
        let mut events = chars("example.com ");
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx);
        assert_eq!(screen.error(), Some(NAME_MISMATCH));
    }

    #[test]
    fn test_failure_returns_to_confirm() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = confirming(&ctx);
        let mut events = chars("example.com");
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx);
        screen.handle_event(
            Event::Outcome(Outcome::PurgeCompleted(Err("purge cache: timed out".to_string()))),
            &ctx,
        );
        assert_eq!(screen.step(), EverythingStep::Confirm);
        assert_eq!(screen.error(), Some("purge cache: timed out"));
    }

    #[test]
    fn test_done_then_any_key_returns() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = confirming(&ctx);
        let mut events = chars("example.com");
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx);
        screen.handle_event(Event::Outcome(Outcome::PurgeCompleted(Ok(()))), &ctx);
        assert_eq!(screen.step(), EverythingStep::Done);
        assert!(render_text(&screen, &ctx).contains("Entire cache purged"));
        let t = screen.handle_event(key(KeyCode::Char(' ')), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::PurgeMenu));
    }
}
