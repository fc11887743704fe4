// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (Reserve).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary action drawn as an outline (Get a quote).
/// Adapts to light/dark theme.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, border_color) = match status {
        button::Status::Hovered => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand_primary
            })),
            colors.brand_primary,
        ),
        button::Status::Disabled => (None, palette::GRAY_400),
        _ => (None, colors.brand_primary),
    };

    button::Style {
        background,
        text_color: colors.brand_primary,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gallery dot indicator. The active dot is opaque with a glow, inactive
/// dots are translucent.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else if status == button::Status::Hovered {
            opacity::OVERLAY_STRONG
        } else {
            opacity::OVERLAY_MEDIUM
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if active { shadow::GLOW } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Gallery thumbnail frame. The active thumbnail gets an accent ring.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let border_color = if active {
            colors.accent
        } else if status == button::Status::Hovered {
            colors.accent_half()
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: colors.text_primary,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: if active { shadow::MD } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Clickable star in the rating widget: no chrome, the glyph carries the state.
pub fn star_input(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn outline_button_fills_on_hover() {
        let theme = Theme::Light;
        assert!(outline(&theme, button::Status::Active).background.is_none());
        assert!(outline(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn active_dot_is_opaque() {
        let theme = Theme::Dark;
        let active = dot(true)(&theme, button::Status::Active);
        let inactive = dot(false)(&theme, button::Status::Active);

        assert_eq!(
            active.background,
            Some(Background::Color(Color {
                a: opacity::OPAQUE,
                ..WHITE
            }))
        );
        assert_ne!(active.background, inactive.background);
    }

    #[test]
    fn only_active_thumbnail_has_accent_ring() {
        let theme = Theme::Light;
        let accent = ColorScheme::for_theme(&theme).accent;
        assert_eq!(
            thumbnail(true)(&theme, button::Status::Active).border.color,
            accent
        );
        assert_eq!(
            thumbnail(false)(&theme, button::Status::Active).border.color,
            Color::TRANSPARENT
        );
    }
}
