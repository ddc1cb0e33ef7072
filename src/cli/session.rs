//! Wiring shared by the commands
//!
//! Loads the configuration, opens the state file and builds the controller.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rategate::GatingController;
use rategate::adapters::{JsonFileStore, SystemContext};
use rategate::config::RategateConfig;
use rategate::paths;

/// Global options that locate config and state
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Config file override
    pub config: Option<PathBuf>,
    /// State file override
    pub state: Option<PathBuf>,
    /// Pinned clock
    pub now: Option<DateTime<Utc>>,
}

impl GlobalOpts {
    /// Config file to use
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::config_file)
    }
}

/// Everything a command needs
#[derive(Debug)]
pub struct Session {
    /// Loaded configuration
    pub config: RategateConfig,
    /// Controller over the state file
    pub controller: GatingController<JsonFileStore, SystemContext>,
}

impl Session {
    /// Load config and open the state file
    pub fn open(opts: &GlobalOpts) -> anyhow::Result<Self> {
        let config = RategateConfig::load_from(&opts.config_path())?;
        let state_path = opts.state.clone().unwrap_or_else(|| config.state_path());
        log::debug!("Using state file {}", state_path.display());

        let mut context = SystemContext::new(config.app_version());
        if let Some(now) = opts.now {
            context = context.with_fixed_now(now);
        }

        let controller = GatingController::new(JsonFileStore::new(state_path), context, config.policy);
        Ok(Self { config, controller })
    }
}
