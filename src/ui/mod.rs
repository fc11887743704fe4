// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - Hotel detail page: header, content cards and sidebar
//!
//! # Components
//!
//! - [`stars`] - Read-only star rating display
//! - [`gallery`] - Image preview with dot indicators and thumbnails
//! - [`rating_widget`] - Clickable stars for the viewer's own rating
//! - [`booking`] - Booking sidebar with Reserve / Get a quote
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`format`] - Price formatting

pub mod booking;
pub mod design_tokens;
pub mod format;
pub mod gallery;
pub mod icons;
pub mod page;
pub mod rating_widget;
pub mod stars;
pub mod styles;
pub mod theming;
