// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and layout constants.
//!
//! # Categories
//!
//! - **Locale**: Fallback language when nothing else matches
//! - **Assets**: Where gallery images are looked up
//! - **Window**: Default and minimum window dimensions

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "tr";

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Directory (relative to the working directory) holding gallery images.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;

/// Minimum window width; below this the sidebar no longer fits.
pub const MIN_WINDOW_WIDTH: f32 = 900.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
