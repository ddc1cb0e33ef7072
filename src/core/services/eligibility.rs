//! Eligibility policy - decides whether the prompt may be shown
//!
//! This is pure business logic with no I/O: it looks at a [`RatingState`]
//! snapshot, the running version and the current time.
//!
//! Checks run in order and stop at the first failure:
//! 1. The running build must differ from the one recorded at the last prompt
//! 2. Enough points must have been earned
//! 3. Strictly more than `minimum_months` calendar months must have elapsed

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::whole_months_between;
use crate::core::models::{AppVersion, RatingState};

/// Default point threshold
pub const DEFAULT_MINIMUM_POINTS: u64 = 100;

/// Default cooldown; 4 keeps the prompt at most three times a year
pub const DEFAULT_MINIMUM_MONTHS: u32 = 4;

/// Thresholds for the gating decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    /// Points needed before asking
    pub minimum_points: u64,
    /// Months that must be strictly exceeded since the last prompt
    pub minimum_months: u32,
    /// Always eligible; for manual QA only, never in production
    pub test_mode: bool,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            minimum_points: DEFAULT_MINIMUM_POINTS,
            minimum_months: DEFAULT_MINIMUM_MONTHS,
            test_mode: false,
        }
    }
}

/// Outcome of an eligibility evaluation, with the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Eligibility {
    /// Test mode short-circuits every check
    TestMode,
    /// All checks passed
    Eligible {
        /// Whole months since the last prompt
        months_elapsed: i64,
    },
    /// The running build was already asked
    SameVersion,
    /// Not enough points yet
    NotEnoughPoints {
        /// Points currently stored
        have: u64,
        /// Points required
        need: u64,
    },
    /// The last prompt is too recent
    CooldownActive {
        /// Whole months since the last prompt
        months_elapsed: i64,
        /// Months that must be exceeded
        required: u32,
    },
}

impl Eligibility {
    /// Whether the prompt may be shown
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::TestMode | Self::Eligible { .. })
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestMode => write!(f, "eligible (test mode)"),
            Self::Eligible { months_elapsed } => {
                write!(f, "eligible ({months_elapsed} month(s) since last prompt)")
            },
            Self::SameVersion => write!(f, "not eligible: this version was already asked"),
            Self::NotEnoughPoints { have, need } => {
                write!(f, "not eligible: {have} of {need} points earned")
            },
            Self::CooldownActive {
                months_elapsed,
                required,
            } => write!(
                f,
                "not eligible: {months_elapsed} month(s) since last prompt, more than {required} required"
            ),
        }
    }
}

impl EligibilityPolicy {
    /// Create a policy with explicit thresholds (test mode off)
    #[must_use]
    pub const fn new(minimum_points: u64, minimum_months: u32) -> Self {
        Self {
            minimum_points,
            minimum_months,
            test_mode: false,
        }
    }

    /// Enable or disable test mode
    #[must_use]
    pub const fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Evaluate every check and report why the decision came out as it did
    #[must_use]
    pub fn evaluate(
        &self,
        state: &RatingState,
        current_version: &AppVersion,
        now: DateTime<Utc>,
    ) -> Eligibility {
        if self.test_mode {
            return Eligibility::TestMode;
        }

        if &state.last_tested_version == current_version {
            return Eligibility::SameVersion;
        }

        if state.points < self.minimum_points {
            return Eligibility::NotEnoughPoints {
                have: state.points,
                need: self.minimum_points,
            };
        }

        let months_elapsed = whole_months_between(state.last_checked, now);
        if months_elapsed <= i64::from(self.minimum_months) {
            return Eligibility::CooldownActive {
                months_elapsed,
                required: self.minimum_months,
            };
        }

        Eligibility::Eligible { months_elapsed }
    }

    /// Whether the prompt may be shown
    #[must_use]
    pub fn is_eligible(
        &self,
        state: &RatingState,
        current_version: &AppVersion,
        now: DateTime<Utc>,
    ) -> bool {
        self.evaluate(state, current_version, now).is_eligible()
    }
}
