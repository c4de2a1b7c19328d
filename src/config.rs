//! Global configuration management
//!
//! User preferences for the signed-in user, the vision service and the task
//! catalog. Config is stored at `~/.config/ecotrack/config.toml` (XDG
//! standard) unless `ECOTRACK_CONFIG` says otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Default Vision `images:annotate` endpoint
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Default environment variable holding the Vision API key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_VISION_API_KEY";

/// Global ecotrack configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task catalog file; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Label detection service
    #[serde(default)]
    pub vision: VisionConfig,
}

/// Session settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Signed-in user; `ECOTRACK_USER` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Label detection service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// `images:annotate` endpoint
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Maximum labels requested per image
    pub max_results: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_results: 5,
            timeout_secs: 30,
        }
    }
}

impl VisionConfig {
    /// Whether an API key is present in the environment
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        std::env::var(&self.api_key_env).is_ok_and(|key| !key.trim().is_empty())
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or default if it does not exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file
    ///
    /// A missing or unreadable file yields the defaults. A relative
    /// `catalog` is resolved against the directory holding the file.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path).map(|content| toml::from_str::<Self>(&content)) {
            Ok(Ok(mut config)) => {
                if let Some(dir) = path.parent() {
                    config.resolve_catalog(dir);
                }
                config
            },
            Ok(Err(e)) => {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    fn resolve_catalog(&mut self, base: &Path) {
        if let Some(catalog) = self.catalog.as_mut().filter(|c| c.is_relative()) {
            *catalog = base.join(&*catalog);
        }
    }
}
