// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Page background behind all cards.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Content card (About, Amenities, Reviews, Rate).
///
/// The surface is slightly translucent over the page background so cards
/// stay readable in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let base = ColorScheme::for_theme(theme).surface_card;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Elevated card for the gallery and the booking sidebar.
pub fn feature_card(theme: &Theme) -> container::Style {
    container::Style {
        shadow: shadow::LG,
        ..card(theme)
    }
}

/// Amenity tile and review block inside a card.
pub fn tile(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_tile)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round accent bullet in front of each payment option.
pub fn bullet(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).accent)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Startup warning banner.
pub fn warning(_theme: &Theme) -> container::Style {
    let color = crate::ui::design_tokens::palette::WARNING_500;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        border: Border {
            color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Tooltip bubble, inverted against the theme for contrast.
pub fn tooltip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    // Dark theme gets a light bubble and vice versa.
    let bg = palette.background.base.color;
    let is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (bg_color, text_color) = if is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_card_is_more_elevated_than_card() {
        let theme = Theme::Light;
        assert!(feature_card(&theme).shadow.blur_radius > card(&theme).shadow.blur_radius);
        assert_eq!(feature_card(&theme).background, card(&theme).background);
    }

    #[test]
    fn tooltip_contrasts_with_theme() {
        let light = tooltip(&Theme::Light).text_color.unwrap_or(Color::BLACK);
        let dark = tooltip(&Theme::Dark).text_color.unwrap_or(Color::BLACK);
        assert!(light.r > 0.5);
        assert!(dark.r < 0.5);
    }
}
