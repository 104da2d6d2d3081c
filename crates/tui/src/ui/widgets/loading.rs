//! Loading state widget for cfctl screens.
//!
//! Provides a consistent loading indicator with animated spinner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{Theme, spinner_char};

/// Render a loading state widget with spinner animation.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `area` - The area to render within
/// * `title` - The title for the widget border (e.g., "Domains")
/// * `message` - The loading message to display (e.g., "Loading zones...")
/// * `frame` - The current animation frame
/// * `theme` - The theme for styling
pub fn render_loading(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    frame: u64,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner_char(frame)), theme.info()),
        Span::styled(message.to_string(), theme.text()),
    ]);
    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title.to_string()),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_loading_shows_spinner_and_message() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| render_loading(f, f.area(), "Domains", "Loading zones...", 0, &Theme::dark()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Loading zones..."));
        assert!(content.contains('⠋'));
        assert!(content.contains("Domains"));
    }
}
