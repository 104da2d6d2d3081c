//! Keyboard input helpers and editable text components.
//!
//! Responsibilities:
//! - Wrap `tui-input` and `ratatui-textarea` behind small editing components.
//! - Classify key chords shared by every screen (Ctrl+C, Ctrl+S, list movement).
//!
//! Non-responsibilities:
//! - Deciding what a key means on a given screen (see `crate::screens`).
//!
//! Invariants:
//! - Helpers here are pure functions of the key event.

pub mod components;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use components::{MultiLineInput, SingleLineInput};

/// Ctrl+C, the global quit chord.
pub fn is_quit_chord(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+S, the purge form submit chord.
pub fn is_submit_chord(key: &KeyEvent) -> bool {
    is_ctrl(key, 's')
}

/// Whether `key` is Ctrl plus the given letter (either case).
pub fn is_ctrl(key: &KeyEvent, letter: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&letter))
}

/// A plain key press of `c` without Ctrl or Alt.
pub fn is_char(key: &KeyEvent, c: char) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && key.code == KeyCode::Char(c)
}

/// Vertical movement requested by a key, if any: arrows and `k`/`j`.
pub fn vertical_step(key: &KeyEvent) -> Option<isize> {
    match key.code {
        KeyCode::Up => Some(-1),
        KeyCode::Down => Some(1),
        _ if is_char(key, 'k') => Some(-1),
        _ if is_char(key, 'j') => Some(1),
        _ => None,
    }
}

/// Move a selection by `step` within `len` items, clamping at both ends.
pub fn step_selection(selected: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(step).min(len - 1)
}
