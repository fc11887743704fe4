// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`HOTEL_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Gallery images are looked up in the first of: `--assets-dir`, the
//! `[listing] assets_dir` setting, or `assets/images` in the working directory.

use crate::config::DEFAULT_ASSETS_DIR;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "HotelLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HOTEL_LENS_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml):
/// - Linux: `~/.config/HotelLens/`
/// - macOS: `~/Library/Application Support/HotelLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\HotelLens\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Picks the directory gallery images are resolved against.
#[must_use]
pub fn resolve_assets_dir(cli: Option<PathBuf>, configured: Option<&Path>) -> PathBuf {
    cli.or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_prefers_cli_then_config() {
        let configured = PathBuf::from("/from/config");
        assert_eq!(
            resolve_assets_dir(Some(PathBuf::from("/from/cli")), Some(&configured)),
            PathBuf::from("/from/cli")
        );
        assert_eq!(resolve_assets_dir(None, Some(&configured)), configured);
        assert_eq!(
            resolve_assets_dir(None, None),
            PathBuf::from(DEFAULT_ASSETS_DIR)
        );
    }
}
