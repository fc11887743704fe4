// SPDX-License-Identifier: MPL-2.0
//! `hotel_lens` renders a single hotel listing detail page with the Iced GUI
//! framework.
//!
//! The page shows a photo gallery, the aggregate and per-review star ratings,
//! amenities, a widget for the viewer's own rating and a booking sidebar.
//! Strings are localized with Fluent and preferences live in `settings.toml`.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod ui;
