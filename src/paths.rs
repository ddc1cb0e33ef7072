//! Centralized path definitions for rategate
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.rategate/
//! ├── config.toml      # Thresholds, app version, prompt texts
//! └── state.json       # Persisted gating fields
//! ```
//!
//! Setting `RATEGATE_HOME` moves the whole directory; `--config` and
//! `--state` override the individual files.

use std::path::PathBuf;

/// Environment variable that relocates the rategate directory
pub const HOME_ENV: &str = "RATEGATE_HOME";

/// Directory name under the user's home
const GLOBAL_DIR: &str = ".rategate";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// State filename
const STATE_FILE: &str = "state.json";

/// Get the rategate directory.
///
/// Returns `$RATEGATE_HOME` when set and non-empty, `~/.rategate` otherwise.
#[must_use]
pub fn global_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR),
    }
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    global_dir().join(CONFIG_FILE)
}

/// Get the default state file path.
#[must_use]
pub fn state_file() -> PathBuf {
    global_dir().join(STATE_FILE)
}
