//! Persisted gating state
//!
//! Four scalar fields survive across launches. A missing field reads as its
//! default, so a fresh install behaves as "never prompted, zero points".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppVersion;

/// Storage keys for the persisted fields
pub mod keys {
    /// When the prompt was last shown (or declined)
    pub const LAST_DATE_CHECKED: &str = "LastDateCheckedKey";
    /// App version token at the last prompt
    pub const TESTED_APP_VERSION: &str = "TestedAppVersionKey";
    /// Points earned since the last prompt
    pub const ACTUAL_XP_POINTS: &str = "ActualXPPointsKey";
    /// Out-of-band "show the prompt somewhere" flag
    pub const SHOULD_SHOW_RATING_MANAGER: &str = "ShouldShowRatingManagerKey";

    /// All keys owned by the gate
    pub const ALL: [&str; 4] =
        [LAST_DATE_CHECKED, TESTED_APP_VERSION, ACTUAL_XP_POINTS, SHOULD_SHOW_RATING_MANAGER];
}

/// The "distant past" used when no prompt was ever recorded
#[must_use]
pub const fn distant_past() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Snapshot of the persisted gating fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingState {
    /// When the prompt was last shown or declined
    pub last_checked: DateTime<Utc>,
    /// App version token recorded at that moment
    pub last_tested_version: AppVersion,
    /// Points accumulated since then
    pub points: u64,
    /// Independent flag the app may consult elsewhere
    pub remote_should_show: bool,
}

impl RatingState {
    /// Whether a prompt has ever been recorded
    #[must_use]
    pub fn ever_prompted(&self) -> bool {
        self.last_checked != distant_past()
    }
}

impl Default for RatingState {
    fn default() -> Self {
        Self {
            last_checked: distant_past(),
            last_tested_version: AppVersion::default(),
            points: 0,
            remote_should_show: false,
        }
    }
}
