//! Theme and Colors
//!
//! NovaCloud's palette for the terminal preview: a dark and a light variant
//! sharing the cyan/purple/blue accent gradient.

use ratatui::style::{Color, Modifier, Style};

use novacloud_core::Theme;

// ============================================================================
// Accent Gradient (same in both themes)
// ============================================================================

/// Cyan - typewriter text and cursor
pub const ACCENT_CYAN: Color = Color::Rgb(34, 211, 238);

/// Purple - testimonials cursor, highlighted plan
pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);

/// Blue - links and CTAs
pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);

/// Status OK green
pub const STATUS_GREEN: Color = Color::Rgb(34, 197, 94);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

// ============================================================================
// Theme Palettes
// ============================================================================

/// Resolved colours for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Card / panel background
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Borders
    pub border: Color,
}

impl Palette {
    /// Dark theme (page default)
    pub const DARK: Self = Self {
        background: Color::Rgb(9, 9, 15),
        surface: Color::Rgb(20, 20, 31),
        text: Color::Rgb(240, 240, 245),
        muted: Color::Rgb(140, 140, 160),
        border: Color::Rgb(45, 45, 60),
    };

    /// Light theme
    pub const LIGHT: Self = Self {
        background: Color::Rgb(248, 250, 252),
        surface: Color::Rgb(255, 255, 255),
        text: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(226, 232, 240),
    };

    /// Palette for `theme`
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    /// Base style: text on background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Secondary text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    /// Heading text
    pub fn heading(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    /// Accent text in `color`
    pub fn accent(&self, color: Color) -> Style {
        Style::default()
            .fg(color)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Panel border
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }
}
