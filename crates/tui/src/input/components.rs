//! Rich input component wrappers using tui-input and ratatui-textarea.
//!
//! Provides text editing with proper cursor management for account fields,
//! list filters, and the multi-line purge forms.

use ratatui::layout::Rect;
use tui_input::{Input, InputRequest};

/// Single-line input wrapper with word navigation and line editing chords.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
}

impl SingleLineInput {
    /// Create a new empty single-line input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with the given value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
        }
    }

    /// Handle key event using InputRequest pattern.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => {
                    self.input.handle(InputRequest::GoToPrevWord);
                }
                KeyCode::Right => {
                    self.input.handle(InputRequest::GoToNextWord);
                }
                // Ctrl+U: clear the whole line
                KeyCode::Char('u') => {
                    self.input.handle(InputRequest::DeleteLine);
                }
                // Ctrl+K: clear to end of line
                KeyCode::Char('k') => {
                    self.input.handle(InputRequest::DeleteTillEnd);
                }
                KeyCode::Char('a') => {
                    self.input.handle(InputRequest::GoToStart);
                }
                KeyCode::Char('e') => {
                    self.input.handle(InputRequest::GoToEnd);
                }
                KeyCode::Char('w') => {
                    self.input.handle(InputRequest::DeletePrevWord);
                }
                _ => {}
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    /// Get current value.
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Get cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.input.reset();
    }

    /// The text to draw: the value itself, or one `mask` per character.
    pub fn display(&self, mask: Option<char>) -> String {
        match mask {
            Some(m) => std::iter::repeat_n(m, self.input.value().chars().count()).collect(),
            None => self.input.value().to_string(),
        }
    }
}

impl std::fmt::Display for SingleLineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input.value())
    }
}

/// Multi-line textarea wrapper for purge item lists.
pub struct MultiLineInput<'a> {
    textarea: tui_textarea::TextArea<'a>,
}

impl<'a> MultiLineInput<'a> {
    /// Create a new empty multi-line input.
    pub fn new() -> Self {
        Self {
            textarea: tui_textarea::TextArea::default(),
        }
    }

    /// Create a new input with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_placeholder_text(placeholder);
        Self { textarea }
    }

    /// Handle key event.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        self.textarea.input(key);
    }

    /// Get current value (lines joined with newlines).
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Check if empty (all lines are empty).
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    /// Number of lines, including empty ones.
    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }
}

impl Default for MultiLineInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MultiLineInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiLineInput")
            .field("lines", &self.textarea.lines().len())
            .finish()
    }
}

impl ratatui::widgets::Widget for &MultiLineInput<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        ratatui::widgets::Widget::render(&self.textarea, area, buf);
    }
}
