//! Centralized path helpers for the config directory and files in it.

use std::path::PathBuf;

use crate::core::app;
use crate::core::config;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/docsnip/). `DOCSNIP_CONFIG_DIR` overrides it.
pub fn config_dir() -> Option<PathBuf> {
    config::config_dir_override()
        .or_else(|| project_dirs().map(|d| d.config_dir().to_path_buf()))
}

/// Stored user preferences (~/.config/docsnip/preferences.json).
pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("preferences.json"))
}
