//! Selection and `/` filtering shared by the account and zone lists.
//!
//! The list owns only the cursor and the filter text; callers own the items
//! and pass the number of currently visible rows into every call.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::input::{SingleLineInput, is_char, step_selection, vertical_step};
use crate::ui::Theme;

/// What a key meant to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    /// The list used the key (movement or filter editing).
    Consumed,
    /// Enter on a visible row; carries its index among the visible rows.
    Select(usize),
    /// Esc with no filter applied.
    Back,
    /// Not a list key; the screen decides.
    Other(KeyEvent),
}

/// Cursor plus filter state for a selectable list.
#[derive(Debug, Clone, Default)]
pub struct FilterList {
    filter: SingleLineInput,
    filtering: bool,
    selected: usize,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the filter prompt is open for typing.
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// The current filter text.
    pub fn filter(&self) -> &str {
        self.filter.value()
    }

    /// Case-insensitive substring match against the filter.
    pub fn matches(&self, text: &str) -> bool {
        let needle = self.filter.value().trim();
        needle.is_empty() || text.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Indices of `items` whose key matches the filter.
    pub fn visible_indices<T>(&self, items: &[T], key: impl Fn(&T) -> &str) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(key(item)))
            .map(|(i, _)| i)
            .collect()
    }

    /// The selected row among `visible` rows, clamped.
    pub fn selected(&self, visible: usize) -> usize {
        self.selected.min(visible.saturating_sub(1))
    }

    pub fn handle_key(&mut self, key: KeyEvent, visible: usize) -> ListKey {
        if self.filtering {
            return self.handle_filter_key(key, visible);
        }

        if let Some(step) = vertical_step(&key) {
            self.selected = step_selection(self.selected(visible), visible, step);
            return ListKey::Consumed;
        }

        match key.code {
            KeyCode::Enter if visible > 0 => ListKey::Select(self.selected(visible)),
            KeyCode::Enter => ListKey::Consumed,
            KeyCode::Esc if !self.filter.is_empty() => {
                self.clear_filter();
                ListKey::Consumed
            }
            KeyCode::Esc => ListKey::Back,
            _ if is_char(&key, '/') => {
                self.filtering = true;
                ListKey::Consumed
            }
            _ => ListKey::Other(key),
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, visible: usize) -> ListKey {
        match key.code {
            KeyCode::Esc => {
                self.clear_filter();
            }
            KeyCode::Enter => {
                self.filtering = false;
            }
            KeyCode::Up | KeyCode::Down => {
                let step = if key.code == KeyCode::Up { -1 } else { 1 };
                self.selected = step_selection(self.selected(visible), visible, step);
            }
            _ => {
                self.filter.handle_key(key);
                self.selected = 0;
            }
        }
        ListKey::Consumed
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.selected = 0;
    }

    /// Render the filter prompt line, or nothing when no filter is active.
    pub fn render_filter(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.filtering && self.filter.is_empty() {
            return;
        }
        let cursor = if self.filtering { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled("Filter: ", theme.text_dim()),
            Span::styled(format!("{}{cursor}", self.filter.value()), theme.text()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
