// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode and the color scheme derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_card: Color,
    pub surface_tile: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub accent: Color,

    /// Outline color of unlit stars.
    pub star_empty: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_50,
            surface_card: palette::WHITE,
            surface_tile: Color::from_rgb(0.97, 0.95, 0.91),

            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            accent: palette::ACCENT_500,

            star_empty: palette::GRAY_200,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_card: Color::from_rgb(0.15, 0.15, 0.16),
            surface_tile: Color::from_rgb(0.2, 0.2, 0.21),

            text_primary: palette::WHITE,
            text_muted: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            accent: palette::ACCENT_400,

            star_empty: palette::GRAY_700,
        }
    }

    /// Picks the scheme matching an Iced theme handed to a style closure.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Accent at half strength, used for half-filled stars.
    #[must_use]
    pub fn accent_half(&self) -> Color {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..self.accent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The Iced base theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
