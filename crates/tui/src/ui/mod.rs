//! Shared rendering helpers for cfctl screens.
//!
//! Responsibilities:
//! - Split a frame into header, body, and footer areas.
//! - Render the common header (title plus active account) and key-hint footer.
//!
//! Does NOT handle:
//! - Screen-specific content (see `crate::screens`).
//! - Terminal setup or teardown (see `crate::runtime::terminal`).

pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub use theme::Theme;

/// Height of the header block, borders included.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the key-hint footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// The three stacked regions every full-frame screen uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header, body, and footer.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    ScreenAreas {
        header,
        body,
        footer,
    }
}

/// A rectangle of `width` x `height` centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the header: screen title on the left, account status on the right.
pub fn render_header(f: &mut Frame, area: Rect, title: &str, account: Option<&str>, theme: &Theme) {
    let account_span = match account {
        Some(name) => Span::styled(format!("Account: {name}"), theme.success()),
        None => Span::styled("No account selected", theme.warning()),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {title} "), theme.title()),
        Span::styled("│ ", theme.text_dim()),
        account_span,
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" cfctl ", theme.title())),
    );
    f.render_widget(header, area);
}

/// Render a footer of `(key, label)` hints, e.g. `Enter Select  Esc Back`.
pub fn render_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key}"), theme.key_hint()));
        spans.push(Span::styled(format!(" {label} "), theme.text_dim()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
