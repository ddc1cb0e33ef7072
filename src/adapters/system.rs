//! System app context
//!
//! The running version comes from configuration; time comes from the wall
//! clock unless pinned.

use chrono::{DateTime, Utc};

use crate::core::models::AppVersion;
use crate::core::ports::AppContext;

/// Wall clock plus a configured version token
#[derive(Debug, Clone)]
pub struct SystemContext {
    version: AppVersion,
    fixed_now: Option<DateTime<Utc>>,
}

impl SystemContext {
    /// Context for the given running version
    #[must_use]
    pub const fn new(version: AppVersion) -> Self {
        Self {
            version,
            fixed_now: None,
        }
    }

    /// Pin the clock to a fixed instant
    #[must_use]
    pub fn with_fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }
}

impl AppContext for SystemContext {
    fn current_version(&self) -> AppVersion {
        self.version.clone()
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}
