// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the page's SVG icons.
//!
//! Icons are single-color SVG sources embedded as strings. The color is set
//! at render time through the SVG style, so one source serves every theme.
//! Handles are created once and cached with `OnceLock`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `waves` not `private_beach`).

use crate::domain::AmenityIcon;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an uncolored `Svg` from a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

#[cfg(test)]
const STAR_POINTS: &str =
    "12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26";

const STAR_FILLED_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#,
    r#"<polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26" fill="black" stroke="black" stroke-width="1.5" stroke-linejoin="round"/>"#,
    "</svg>"
);

const STAR_OUTLINE_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#,
    r#"<polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26" fill="none" stroke="black" stroke-width="1.5" stroke-linejoin="round"/>"#,
    "</svg>"
);

const MAP_PIN_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M12 22s7-6.2 7-12a7 7 0 1 0-14 0c0 5.8 7 12 7 12z"/>"#,
    r#"<circle cx="12" cy="10" r="2.5"/>"#,
    "</svg>"
);

const WIFI_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round">"#,
    r#"<path d="M2 8.5a15 15 0 0 1 20 0"/>"#,
    r#"<path d="M5 12a10.5 10.5 0 0 1 14 0"/>"#,
    r#"<path d="M8.5 15.5a5.5 5.5 0 0 1 7 0"/>"#,
    r#"<circle cx="12" cy="19.5" r="1" fill="black"/>"#,
    "</svg>"
);

const CAR_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M3 16v-3l2.5-5.5h13L21 13v3z"/>"#,
    r#"<path d="M3 13h18"/>"#,
    r#"<circle cx="7" cy="17.5" r="1.8"/>"#,
    r#"<circle cx="17" cy="17.5" r="1.8"/>"#,
    "</svg>"
);

const UTENSILS_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M6 2v7a2 2 0 0 0 4 0V2"/>"#,
    r#"<path d="M8 9v13"/>"#,
    r#"<path d="M17 22V2c-2.5 1.5-3.5 4-3.5 8h3.5"/>"#,
    "</svg>"
);

const WAVES_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round">"#,
    r#"<path d="M2 7c2.5 0 2.5-2 5-2s2.5 2 5 2 2.5-2 5-2 2.5 2 5 2"/>"#,
    r#"<path d="M2 13c2.5 0 2.5-2 5-2s2.5 2 5 2 2.5-2 5-2 2.5 2 5 2"/>"#,
    r#"<path d="M2 19c2.5 0 2.5-2 5-2s2.5 2 5 2 2.5-2 5-2 2.5 2 5 2"/>"#,
    "</svg>"
);

const SPARKLE_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linejoin="round">"#,
    r#"<path d="M12 2l2.2 7.8L22 12l-7.8 2.2L12 22l-2.2-7.8L2 12l7.8-2.2z"/>"#,
    "</svg>"
);

const CHECK_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M4 12.5l5 5L20 6.5"/>"#,
    "</svg>"
);

define_icon!(star_filled, STAR_FILLED_SVG, "Five-pointed star, filled.");
define_icon!(star_outline, STAR_OUTLINE_SVG, "Five-pointed star, outline only.");
define_icon!(map_pin, MAP_PIN_SVG, "Map pin: location marker.");
define_icon!(wifi, WIFI_SVG, "Wi-Fi: three arcs over a dot.");
define_icon!(car, CAR_SVG, "Car: side view with two wheels.");
define_icon!(utensils, UTENSILS_SVG, "Utensils: fork and knife.");
define_icon!(waves, WAVES_SVG, "Waves: three wavy lines.");
define_icon!(sparkle, SPARKLE_SVG, "Sparkle: four-pointed star.");
define_icon!(check, CHECK_SVG, "Check mark.");

/// Glyph for an amenity.
pub fn amenity<'a>(icon: AmenityIcon) -> Svg<'a> {
    match icon {
        AmenityIcon::Wifi => wifi(),
        AmenityIcon::Car => car(),
        AmenityIcon::Utensils => utensils(),
        AmenityIcon::Waves => waves(),
        AmenityIcon::Generic => sparkle(),
    }
}

/// Sizes an icon square and paints it with a single color.
pub fn sized<'a>(icon: Svg<'a>, size: f32, color: Color) -> Svg<'a> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_sources_share_geometry() {
        assert!(STAR_FILLED_SVG.contains(STAR_POINTS));
        assert!(STAR_OUTLINE_SVG.contains(STAR_POINTS));
    }

    #[test]
    fn sources_are_standalone_svg_documents() {
        for source in [
            STAR_FILLED_SVG,
            STAR_OUTLINE_SVG,
            MAP_PIN_SVG,
            WIFI_SVG,
            CAR_SVG,
            UTENSILS_SVG,
            WAVES_SVG,
            SPARKLE_SVG,
            CHECK_SVG,
        ] {
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
            assert!(source.contains("viewBox=\"0 0 24 24\""));
        }
    }
}
