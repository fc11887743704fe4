// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use hotel_lens::domain::Rating;
    use hotel_lens::ui::design_tokens::{opacity, palette, sizing, spacing};
    use hotel_lens::ui::stars::{self, StarFill, StarSize};
    use hotel_lens::ui::styles::{button, container};
    use hotel_lens::ui::theming::ColorScheme;
    use iced::widget::button::Status;
    use iced::Theme;

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::outline(&theme, status);
                let _ = button::star_input(&theme, status);
                let _ = button::dot(true)(&theme, status);
                let _ = button::thumbnail(false)(&theme, status);
            }
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = container::page(&theme);
        let _ = container::card(&theme);
        let _ = container::feature_card(&theme);
        let _ = container::tile(&theme);
        let _ = container::bullet(&theme);
        let _ = container::warning(&theme);
        let _ = container::tooltip(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::ACCENT_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_MEDIUM;
        assert_eq!(StarSize::Sm.pixels(), sizing::STAR_SM);
        assert_eq!(StarSize::Lg.pixels(), sizing::STAR_LG);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&Theme::Light);
        let dark = ColorScheme::for_theme(&Theme::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_page.r > dark.surface_page.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn star_fills_map_to_theme_accent() {
        for theme in [Theme::Light, Theme::Dark] {
            let colors = ColorScheme::for_theme(&theme);
            assert_eq!(stars::fill_color(StarFill::Full, &theme), colors.accent);
            assert_eq!(stars::fill_color(StarFill::Half, &theme), colors.accent_half());
            assert_eq!(stars::fill_color(StarFill::Empty, &theme), colors.star_empty);
        }
        assert_eq!(stars::indicators(Rating::new(4.5))[4], StarFill::Half);
    }
}
