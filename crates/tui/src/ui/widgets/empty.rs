//! Empty and error state widgets for cfctl screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

/// Render an empty state with a custom message.
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message.to_string())
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title.to_string()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

/// Render an error message inside a bordered block.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str, theme: &Theme) {
    let widget = Paragraph::new(format!("✗ {error}"))
        .style(theme.error())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error())
                .title(title.to_string()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_error_state_wraps_long_message() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                render_error_state(
                    f,
                    f.area(),
                    "Error",
                    "timeout fetching zones. Check network",
                    &Theme::dark(),
                )
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("timeout"));
        assert!(content.contains("network"));
    }
}
