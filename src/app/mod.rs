// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the page state to the listing, localization and
//! theme, and routes messages to it. All updates are synchronous.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::Hotel;
use crate::i18n::fluent::I18n;
use crate::ui::page;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    hotel: Hotel,
    page: page::State,
    assets_dir: PathBuf,
    theme: Theme,
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("hotel", &self.hotel.name)
            .field("page", &self.page)
            .field("theme", &self.theme)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Boot must be `Fn`, so every call starts from its own copy of the flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the resolved launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            hotel,
            assets_dir,
            warnings,
        } = flags;

        let app = Self::with_parts(I18n::new(lang, &config), &config, hotel, assets_dir, warnings);
        tracing::info!(
            hotel = %app.hotel.name,
            locale = %app.i18n.current_locale(),
            images = app.hotel.image_count(),
            "page ready"
        );
        (app, Task::none())
    }

    /// Assembles the app from already loaded parts.
    pub fn with_parts(
        i18n: I18n,
        config: &Config,
        hotel: Hotel,
        assets_dir: PathBuf,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            i18n,
            page: page::State::new(&hotel),
            hotel,
            assets_dir,
            // System detection runs once here, not on every frame.
            theme: config.general.theme_mode.iced_theme(),
            warnings,
        }
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.hotel.name, self.i18n.tr("window-title"))
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn page(&self) -> &page::State {
        &self.page
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(message) => self.page.handle(message, &self.hotel),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.page
            .view(page::ViewContext {
                i18n: &self.i18n,
                hotel: &self.hotel,
                assets_dir: &self.assets_dir,
                theme: self.theme.clone(),
                warnings: &self.warnings,
            })
            .map(Message::Page)
    }
}
