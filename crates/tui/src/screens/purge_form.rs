//! Free-form purge by URL, hostname, tag, or prefix.
//!
//! Items are entered one per line (commas also split). Ctrl+S validates
//! locally and, if valid, issues the purge.

use cfctl_client::{PurgeRequest, Zone};
use cfctl_config::validation::parse_list_input;
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
use crate::input::{MultiLineInput, is_submit_chord};
use crate::ui::theme::spinner_char;
use crate::ui::{render_footer, render_header, screen_areas};
use crate::utils::{format_count, plural_noun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeKind {
    Url,
    Hostname,
    Tag,
    Prefix,
}

impl PurgeKind {
    /// Build the request for the parsed items.
    pub fn request(self, items: Vec<String>) -> PurgeRequest {
        match self {
            Self::Url => PurgeRequest::Files(items),
            Self::Hostname => PurgeRequest::Hosts(items),
            Self::Tag => PurgeRequest::Tags(items),
            Self::Prefix => PurgeRequest::Prefixes(items),
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Url => "Purge by URL",
            Self::Hostname => "Purge by Hostname",
            Self::Tag => "Purge by Tag",
            Self::Prefix => "Purge by Prefix",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Self::Url => "Enter full URLs (one per line, max 30), e.g. https://example.com/style.css",
            Self::Hostname => "Enter hostnames (one per line), e.g. images.example.com",
            Self::Tag => "Enter Cache-Tag values (one per line, max 30)",
            Self::Prefix => "Enter URL prefixes (one per line), e.g. https://example.com/blog/",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Url => "https://example.com/path/file.js",
            Self::Hostname => "www.example.com",
            Self::Tag => "product-listing",
            Self::Prefix => "https://example.com/assets/",
        }
    }
}

#[derive(Debug)]
pub struct PurgeFormScreen {
    zone: Zone,
    kind: PurgeKind,
    input: MultiLineInput<'static>,
    purging: bool,
    submitted: Option<PurgeRequest>,
    error: Option<String>,
    summary: Option<String>,
}

impl PurgeFormScreen {
    pub fn new(zone: Zone, kind: PurgeKind) -> Self {
        Self {
            zone,
            kind,
            input: MultiLineInput::with_placeholder(kind.placeholder()),
            purging: false,
            submitted: None,
            error: None,
            summary: None,
        }
    }

    pub fn kind(&self) -> PurgeKind {
        self.kind
    }

    pub fn is_purging(&self) -> bool {
        self.purging
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success summary once the purge completed, e.g. `✓ Purged 2 URLs`.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn submit(&mut self) -> Transition {
        let request = self.kind.request(parse_list_input(&self.input.value()));
        if let Err(e) = request.validate() {
            self.error = Some(e.to_string());
            return Transition::none();
        }
        self.error = None;
        self.purging = true;
        self.submitted = Some(request.clone());
        Transition::command(Command::Purge {
            zone_id: self.zone.id.clone(),
            request,
        })
    }

    fn complete(&mut self, result: Result<(), String>) {
        self.purging = false;
        let request = self.submitted.take();
        match (result, request) {
            (Ok(()), Some(request)) => {
                let noun = request.item_noun();
                self.summary = Some(format!(
                    "✓ Purged {}",
                    format_count(request.item_count(), noun, &plural_noun(noun))
                ));
            }
            (Ok(()), None) => self.summary = Some("✓ Purge completed".to_string()),
            (Err(message), _) => self.error = Some(message),
        }
    }
}

impl ScreenState for PurgeFormScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        match event {
            Event::Outcome(Outcome::PurgeCompleted(result)) if self.purging => {
                self.complete(result);
                Transition::none()
            }
            Event::Key(_) if self.purging => Transition::none(),
            Event::Key(_) if self.summary.is_some() => {
                Transition::to(PurgeMenuScreen::new(self.zone.clone()))
            }
            Event::Key(key) if key.code == KeyCode::Esc => {
                Transition::to(PurgeMenuScreen::new(self.zone.clone()))
            }
            Event::Key(key) if is_submit_chord(&key) => {
                if self.input.is_empty() {
                    Transition::none()
                } else {
                    self.submit()
                }
            }
            Event::Key(key) => {
                self.input.handle_key(key);
                Transition::none()
            }
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(
            f,
            areas.header,
            &format!("{}: {}", self.kind.title(), self.zone.name),
            ctx.active_account(),
            theme,
        );

        let note_height = if self.kind == PurgeKind::Tag { 1 } else { 0 };
        let [instructions, note, editor, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(note_height),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(areas.body);

        f.render_widget(
            Paragraph::new(Span::styled(self.kind.instructions(), theme.text())),
            instructions,
        );
        if self.kind == PurgeKind::Tag {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Note: purge by tag requires an Enterprise plan.",
                    theme.warning(),
                )),
                note,
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Items ");
        let inner = block.inner(editor);
        f.render_widget(block, editor);
        f.render_widget(&self.input, inner);

        let status_line = if self.purging {
            Line::from(Span::styled(
                format!("{} Purging...", spinner_char(ctx.frame)),
                theme.info(),
            ))
        } else if let Some(summary) = &self.summary {
            Line::from(vec![
                Span::styled(summary.clone(), theme.success()),
                Span::styled("  Press any key to continue", theme.text_dim()),
            ])
        } else if let Some(error) = &self.error {
            Line::from(Span::styled(format!("✗ {error}"), theme.error()))
        } else {
            Line::default()
        };
        f.render_widget(Paragraph::new(status_line).wrap(Wrap { trim: true }), status);

        render_footer(
            f,
            areas.footer,
            &[("Ctrl+S", "Purge"), ("Enter", "New Line"), ("Esc", "Back")],
            theme,
        );
    }
}
