//! App context port
//!
//! Supplies the two live inputs of every decision: what build is running and
//! what time it is.

use chrono::{DateTime, Utc};

use crate::core::models::AppVersion;

/// Current app identity and wall clock
pub trait AppContext {
    /// Version token of the running build, `"<shortVersion>.<buildNumber>"`
    fn current_version(&self) -> AppVersion;

    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

impl<T: AppContext + ?Sized> AppContext for &T {
    fn current_version(&self) -> AppVersion {
        (**self).current_version()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
