//! Color palettes and style builders.
//!
//! Responsibilities:
//! - Define the palettes selectable through `defaults.theme`.
//! - Build ratatui `Style` values consistently across screens.
//!
//! Does NOT handle:
//! - Deciding when colors are disabled (see `Theme::resolve`).

use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for animated loading indicator.
///
/// These Braille patterns create a smooth spinning animation when cycled.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// ```
/// use cfctl::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u64) -> char {
    SPINNER_CHARS[(frame % SPINNER_CHARS.len() as u64) as usize]
}

/// A color palette for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub secondary: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default palette for dark terminals.
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(0x00, 0xD4, 0xFF),
            secondary: Color::Rgb(0xFF, 0x6B, 0x00),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_dim: Color::Rgb(0x66, 0x66, 0x66),
            border: Color::Rgb(0x00, 0xD4, 0xFF),
            highlight_fg: Color::Black,
            highlight_bg: Color::Rgb(0x00, 0xD4, 0xFF),
            success: Color::Rgb(0x00, 0xFF, 0x88),
            warning: Color::Rgb(0xFF, 0xAA, 0x00),
            error: Color::Rgb(0xFF, 0x00, 0x44),
            info: Color::Rgb(0x00, 0xD4, 0xFF),
        }
    }

    /// Palette for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            secondary: Color::Rgb(0xC0, 0x50, 0x00),
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::Blue,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
            success: Color::Green,
            warning: Color::Rgb(0xB0, 0x70, 0x00),
            error: Color::Red,
            info: Color::Blue,
        }
    }

    /// Colorless palette; selection relies on reverse video.
    pub fn plain() -> Self {
        Self {
            accent: Color::Reset,
            secondary: Color::Reset,
            text: Color::Reset,
            text_dim: Color::Reset,
            border: Color::Reset,
            highlight_fg: Color::Reset,
            highlight_bg: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            info: Color::Reset,
        }
    }

    /// Look up a palette by its configured name. Unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            "plain" | "none" | "mono" => Self::plain(),
            _ => Self::dark(),
        }
    }

    /// Pick the palette for a session.
    ///
    /// Colors are off when `colors_enabled` is false or `NO_COLOR` is set.
    pub fn resolve(name: &str, colors_enabled: bool) -> Self {
        if !colors_enabled || std::env::var_os("NO_COLOR").is_some() {
            Self::plain()
        } else {
            Self::from_name(name)
        }
    }

    fn is_plain(&self) -> bool {
        self.highlight_bg == Color::Reset
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Selection style. Plain palettes use reverse video so the cursor stays visible.
    pub fn highlight(&self) -> Style {
        if self.is_plain() {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.highlight_fg)
                .bg(self.highlight_bg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Style for key hints in footers, e.g. `Enter`.
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }
}
