//! Centralized path definitions for ecotrack
//!
//! This module provides a single source of truth for all filesystem paths used by ecotrack.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/ecotrack/
//! └── config.toml               # Session user, vision service, catalog path
//! ```
//!
//! `ECOTRACK_CONFIG` points at a different config file.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "ECOTRACK_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = "ecotrack";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global ecotrack directory.
///
/// Returns `~/.config/ecotrack/` on Linux, the platform config dir elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// Honors `ECOTRACK_CONFIG`, otherwise `~/.config/ecotrack/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
