//! Shared UI widgets for common rendering patterns.
//!
//! This module provides reusable widgets for loading states, error and
//! empty states, and selectable lists across cfctl screens.

pub mod empty;
pub mod list;
pub mod loading;

pub use empty::{render_empty_state, render_error_state};
pub use list::{Row, render_select_list};
pub use loading::render_loading;
