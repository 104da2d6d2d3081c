//! cfctl library
//!
//! The screen state machine, its driver, and the runtime that executes
//! screen commands against the Cloudflare API and the local stores.
//!
//! # Example
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use cfctl::app::{App, Context};
//! use cfctl::ui::Theme;
//! use cfctl_config::Config;
//!
//! let ctx = Context::new(Config::default(), PathBuf::from("config.yaml"), Theme::dark(), None);
//! let mut app = App::new(ctx);
//! assert!(app.start().is_empty());
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod runtime;
pub mod screens;
pub mod ui;
pub mod utils;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, Context};
pub use screens::{Screen, ScreenKind};
