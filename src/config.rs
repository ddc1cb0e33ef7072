//! Configuration management
//!
//! Thresholds, the running app version, the asker prompt texts and the state
//! file location. Stored at `~/.rategate/config.toml` by default.
//!
//! ```toml
//! [policy]
//! minimum_points = 100
//! minimum_months = 4
//! test_mode = false
//!
//! [app]
//! version = "1.4.0"
//! build = "12"
//!
//! [prompt]
//! title = "Enjoying the app?"
//! message = "Would you mind leaving a review?"
//! confirm_text = "Sure"
//! dismiss_text = "Not now"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{AppVersion, AskerPrompt};
use crate::core::services::EligibilityPolicy;
use crate::paths;

/// Errors raised while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The file could not be written
    #[error("cannot write config {path}: {source}")]
    Write {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be encoded
    #[error("encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Top-level rategate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RategateConfig {
    /// Gating thresholds
    #[serde(default)]
    pub policy: EligibilityPolicy,
    /// Running app identity
    #[serde(default)]
    pub app: AppConfig,
    /// Asker prompt texts; without them the review is requested directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<AskerPrompt>,
    /// State storage
    #[serde(default)]
    pub store: StoreConfig,
    /// Review destination
    #[serde(default)]
    pub review: ReviewConfig,
}

/// Running app identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Marketing version, e.g. "1.4.0"
    #[serde(default = "default_version")]
    pub version: String,
    /// Build number, e.g. "12"
    #[serde(default = "default_build")]
    pub build: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_build() -> String {
    "1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            build: default_build(),
        }
    }
}

/// State storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// State file; defaults to `~/.rategate/state.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Where users leave their review
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Store page or review form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RategateConfig {
    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }

    /// Version token of the configured build
    #[must_use]
    pub fn app_version(&self) -> AppVersion {
        AppVersion::from_parts(&self.app.version, &self.app.build)
    }

    /// State file to use
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(paths::state_file)
    }

    /// Configuration written by `rategate init`
    #[must_use]
    pub fn starter() -> Self {
        Self {
            prompt: Some(AskerPrompt::new(
                "Enjoying the app?",
                "Would you mind leaving a review?",
                "Sure",
                "Not now",
            )),
            ..Self::default()
        }
    }
}
