// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::domain::Hotel;
use crate::ui::page;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Page(page::Message),
}

/// Everything the launcher resolved before the first frame.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub lang: Option<String>,
    /// Loaded settings.
    pub config: Config,
    /// The listing to display.
    pub hotel: Hotel,
    /// Directory gallery images are resolved against.
    pub assets_dir: PathBuf,
    /// Translation keys of warnings raised during startup.
    pub warnings: Vec<String>,
}
