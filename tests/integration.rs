// SPDX-License-Identifier: MPL-2.0
use hotel_lens::app::{App, Message};
use hotel_lens::config::{self, Config, GeneralConfig};
use hotel_lens::i18n::fluent::I18n;
use hotel_lens::listing;
use hotel_lens::ui::gallery::{self, Highlight};
use hotel_lens::ui::theming::ThemeMode;
use hotel_lens::ui::{booking, format, page, rating_widget};
use iced::Theme;
use std::path::PathBuf;
use tempfile::tempdir;

/// Every translation key the page renders.
const UI_KEYS: &[&str] = &[
    "window-title",
    "number-group-separator",
    "warning-config-load-error",
    "warning-listing-fallback",
    "header-per-night",
    "gallery-image-alt",
    "section-about",
    "section-amenities",
    "section-reviews",
    "section-rate",
    "rating-confirmation",
    "booking-per-night",
    "booking-payment-options",
    "booking-reserve",
    "booking-quote",
];

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    }
}

fn app(lang: &str) -> App {
    let config = Config::default();
    let hotel = listing::load_embedded().expect("embedded listing");
    App::with_parts(
        I18n::new(Some(lang.to_string()), &config),
        &config,
        hotel,
        PathBuf::from("assets/images"),
        Vec::new(),
    )
}

fn send(app: &mut App, message: page::Message) {
    let _ = app.update(Message::Page(message));
}

#[test]
fn initial_page_state() {
    let app = app("en-US");
    let page = app.page();

    assert_eq!(page.gallery().selected(), 0);
    assert_eq!(page.rating().user_rating().value(), 0);
    assert!(page.rating().confirmation(&app.i18n).is_none());
}

#[test]
fn selecting_thumbnail_moves_preview_and_dot() {
    let mut app = app("en-US");
    send(&mut app, page::Message::Gallery(gallery::Message::Select(1)));

    let gallery = app.page().gallery();
    assert_eq!(gallery.selected(), 1);
    for index in 0..gallery.len() {
        let expected = if index == 1 {
            Highlight::Active
        } else {
            Highlight::Inactive
        };
        assert_eq!(gallery.highlight(index), expected, "dot {index}");
    }
}

#[test]
fn arrow_navigation_wraps_both_ways() {
    let mut app = app("en-US");
    let len = app.page().gallery().len();

    send(&mut app, page::Message::Gallery(gallery::Message::Previous));
    assert_eq!(app.page().gallery().selected(), len - 1);

    send(&mut app, page::Message::Gallery(gallery::Message::Next));
    assert_eq!(app.page().gallery().selected(), 0);
}

#[test]
fn rating_clicks_overwrite_and_confirm() {
    let mut app = app("en-US");

    send(&mut app, page::Message::Rating(rating_widget::Message::Rate(4)));
    assert_eq!(app.page().rating().user_rating().value(), 4);
    assert_eq!(
        app.page().rating().confirmation(&app.i18n).as_deref(),
        Some("Thanks! You gave 4 stars.")
    );

    send(&mut app, page::Message::Rating(rating_widget::Message::Rate(2)));
    assert_eq!(app.page().rating().user_rating().value(), 2);
    assert!(app
        .page()
        .rating()
        .confirmation(&app.i18n)
        .is_some_and(|text| text.contains('2')));
}

#[test]
fn booking_buttons_leave_state_untouched() {
    let mut app = app("tr");
    send(&mut app, page::Message::Gallery(gallery::Message::Select(2)));
    let before = app.page().clone();

    send(&mut app, page::Message::Booking(booking::Message::Reserve));
    send(&mut app, page::Message::Booking(booking::Message::RequestQuote));

    assert_eq!(app.page(), &before);
}

#[test]
fn title_includes_hotel_name() {
    let app = app("tr");
    assert!(app.title().starts_with("Loyal Garden Beach Resort"));
}

#[test]
fn cli_language_beats_config() {
    let config = config_with_language("tr");
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en-US"), &path).expect("write en-US config");
    let loaded = config::load_from_path(&path).expect("load en-US config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config::save_to_path(&config_with_language("tr"), &path).expect("write tr config");
    let loaded = config::load_from_path(&path).expect("load tr config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "tr");
}

#[test]
fn invalid_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("write broken config");

    assert!(config::load_from_path(&dir.path().join("settings.toml")).is_err());

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("warning-config-load-error"));
}

#[test]
fn every_ui_key_exists_in_every_bundle() {
    let locales = I18n::default().available_locales;
    assert!(locales.len() >= 2);

    for locale in &locales {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in UI_KEYS {
            assert!(i18n.has_key(key), "{locale} lacks {key}");
        }
    }
}

#[test]
fn price_uses_locale_separator() {
    let tr = I18n::new(Some("tr".to_string()), &Config::default());
    let en = I18n::new(Some("en-US".to_string()), &Config::default());

    assert_eq!(format::price(3200, "TL", &tr), "3.200 TL");
    assert_eq!(format::price(3200, "TL", &en), "3,200 TL");
}

#[test]
fn rejected_listing_file_falls_back_to_bundled() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("hotel.toml");
    std::fs::write(
        &path,
        "name = \"Empty\"\nlocation = \"Nowhere\"\nprice_per_night = 10\nrating = 2.0\nimages = []\n",
    )
    .expect("write listing");

    let (hotel, warning) = listing::load_or_embedded(Some(path.as_path())).expect("fallback listing");
    assert_eq!(hotel.name, "Loyal Garden Beach Resort");
    assert_eq!(warning, Some("warning-listing-fallback"));
}

#[test]
fn configured_theme_is_resolved_at_startup() {
    let config = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let hotel = listing::load_embedded().expect("embedded listing");
    let mut app = App::with_parts(
        I18n::new(Some("en-US".to_string()), &config),
        &config,
        hotel,
        PathBuf::from("assets/images"),
        Vec::new(),
    );

    assert_eq!(app.theme(), Theme::Dark);
    send(&mut app, page::Message::Gallery(gallery::Message::Next));
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn single_star_rating_reads_singular() {
    let mut app = app("en-US");
    send(&mut app, page::Message::Rating(rating_widget::Message::Rate(1)));

    assert_eq!(
        app.page().rating().confirmation(&app.i18n).as_deref(),
        Some("Thanks! You gave 1 star.")
    );
}
