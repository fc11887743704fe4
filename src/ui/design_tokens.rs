// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens.

## Organization

- **Palette**: Base colors, including the gold accent used for stars
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (stars, gallery, sidebar)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use hotel_lens::ui::design_tokens::{palette, opacity, spacing};
use iced::Color;

// Half-filled star color
let half = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::ACCENT_500
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Brand colors (deep sea blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.5, 0.78);
    pub const PRIMARY_500: Color = Color::from_rgb(0.09, 0.36, 0.62); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.06, 0.28, 0.5);

    // Accent (sand gold) for stars and highlights
    pub const ACCENT_400: Color = Color::from_rgb(0.98, 0.78, 0.33);
    pub const ACCENT_500: Color = Color::from_rgb(0.96, 0.69, 0.13);
    pub const ACCENT_600: Color = Color::from_rgb(0.85, 0.58, 0.05);

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card surfaces over the page gradient.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Star sizes for the read-only rating display
    pub const STAR_SM: f32 = 16.0;
    pub const STAR_MD: f32 = 20.0;
    pub const STAR_LG: f32 = 24.0;

    /// Clickable stars in the rating widget.
    pub const STAR_INPUT: f32 = 32.0;

    // Icons
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;

    // Gallery
    pub const PREVIEW_HEIGHT: f32 = 420.0;
    pub const THUMBNAIL_HEIGHT: f32 = 96.0;
    pub const DOT: f32 = 12.0;
    pub const BULLET: f32 = 8.0;

    // Layout
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
    pub const SIDEBAR_WIDTH: f32 = 320.0;
    pub const BUTTON_HEIGHT: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hotel name in the header.
    pub const DISPLAY: f32 = 40.0;

    /// Price figures.
    pub const PRICE: f32 = 30.0;

    /// Card titles (About, Amenities, Reviews...)
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - sidebar headings, review authors
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - description, location
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 16.0;

    /// Small body - rating labels, payment options, perks
    pub const BODY_SM: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Button shadow.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Card shadow.
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    /// "Luxury" shadow for the gallery and the booking card.
    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };

    /// Glow behind the active gallery dot.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.6,
            ..palette::WHITE
        },
        offset: Vector::ZERO,
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::STAR_LG > sizing::STAR_MD);
    assert!(sizing::STAR_MD > sizing::STAR_SM);
    assert!(sizing::STAR_INPUT > sizing::STAR_LG);
    assert!(sizing::PREVIEW_HEIGHT > sizing::THUMBNAIL_HEIGHT);

    assert!(typography::DISPLAY > typography::PRICE);
    assert!(typography::PRICE > typography::TITLE_MD);
    assert!(typography::BODY > typography::BODY_SM);
};
