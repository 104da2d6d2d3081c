//! Selectable list rendering shared by menus and account/zone pickers.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::ui::theme::Theme;

/// A list row with a title and an optional dimmed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub description: Option<String>,
}

impl Row {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Render `rows` as a bordered list with `selected` highlighted.
pub fn render_select_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[Row],
    selected: usize,
    theme: &Theme,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::styled(row.title.clone(), theme.text())];
            if let Some(description) = &row.description {
                spans.push(Span::styled(format!("  {description}"), theme.text_dim()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title.to_string()),
        )
        .highlight_style(theme.highlight())
        .highlight_symbol("› ");

    let selected = (!rows.is_empty()).then_some(selected.min(rows.len().saturating_sub(1)));
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
