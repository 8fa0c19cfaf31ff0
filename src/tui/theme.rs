//! Colour palettes for the light and dark themes.
//!
//! Components never pick colours directly; they take a `Palette` prop so a
//! theme toggle repaints everything on the next frame.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

mod colors {
    use super::Color;

    // === Brand ===
    pub const RAILS_RED: Color = Color::Rgb(220, 38, 38); // red-600
    pub const RAILS_RED_LIGHT: Color = Color::Rgb(248, 113, 113); // red-400

    // === Light ===
    pub const LIGHT_TEXT: Color = Color::Rgb(17, 24, 39); // gray-900
    pub const LIGHT_MUTED: Color = Color::Rgb(107, 114, 128); // gray-500
    pub const LIGHT_BORDER: Color = Color::Rgb(209, 213, 219); // gray-300
    pub const LIGHT_CHIP: Color = Color::Rgb(229, 231, 235); // gray-200
    pub const LIGHT_LINK: Color = Color::Rgb(37, 99, 235); // blue-600
    pub const LIGHT_ERROR: Color = Color::Rgb(185, 28, 28); // red-700
    pub const LIGHT_SUCCESS: Color = Color::Rgb(22, 163, 74); // green-600

    // === Dark ===
    pub const DARK_TEXT: Color = Color::Rgb(243, 244, 246); // gray-100
    pub const DARK_MUTED: Color = Color::Rgb(156, 163, 175); // gray-400
    pub const DARK_BORDER: Color = Color::Rgb(55, 65, 81); // gray-700
    pub const DARK_CHIP: Color = Color::Rgb(55, 65, 81); // gray-700
    pub const DARK_LINK: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const DARK_ERROR: Color = Color::Rgb(252, 165, 165); // red-300
    pub const DARK_SUCCESS: Color = Color::Rgb(74, 222, 128); // green-400
}

/// Resolved colours used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub chip: Color,
    pub accent: Color,
    pub link: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text: colors::LIGHT_TEXT,
            muted: colors::LIGHT_MUTED,
            border: colors::LIGHT_BORDER,
            chip: colors::LIGHT_CHIP,
            accent: colors::RAILS_RED,
            link: colors::LIGHT_LINK,
            error: colors::LIGHT_ERROR,
            success: colors::LIGHT_SUCCESS,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text: colors::DARK_TEXT,
            muted: colors::DARK_MUTED,
            border: colors::DARK_BORDER,
            chip: colors::DARK_CHIP,
            accent: colors::RAILS_RED_LIGHT,
            link: colors::DARK_LINK,
            error: colors::DARK_ERROR,
            success: colors::DARK_SUCCESS,
        }
    }

    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
