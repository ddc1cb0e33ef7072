//! Typed access to the persisted gating fields
//!
//! Wraps a [`KeyValueStore`] handle. Reads never fail: a missing or
//! mistyped value reads as its default.

use chrono::{DateTime, Utc};

use crate::core::models::{AppVersion, RatingState, distant_past, keys};
use crate::core::ports::KeyValueStore;

/// The four gating fields on top of a key-value store
#[derive(Debug)]
pub struct PersistedState<S> {
    store: S,
}

impl<S: KeyValueStore> PersistedState<S> {
    /// Wrap a store handle
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// When the prompt was last shown or declined
    pub fn last_checked(&self) -> DateTime<Utc> {
        self.store.get_timestamp(keys::LAST_DATE_CHECKED).unwrap_or_else(distant_past)
    }

    /// Record when the prompt was shown or declined
    pub fn set_last_checked(&self, at: DateTime<Utc>) -> anyhow::Result<()> {
        self.store.set_timestamp(keys::LAST_DATE_CHECKED, at)
    }

    /// Version token recorded at the last prompt
    pub fn last_tested_version(&self) -> AppVersion {
        self.store
            .get_string(keys::TESTED_APP_VERSION)
            .map(AppVersion::from)
            .unwrap_or_default()
    }

    /// Record the version token of the last prompt
    pub fn set_last_tested_version(&self, version: &AppVersion) -> anyhow::Result<()> {
        self.store.set_string(keys::TESTED_APP_VERSION, version.as_str())
    }

    /// Points earned since the last prompt
    ///
    /// A negative stored value (written by something else) reads as zero.
    pub fn points(&self) -> u64 {
        self.store
            .get_int(keys::ACTUAL_XP_POINTS)
            .and_then(|p| u64::try_from(p).ok())
            .unwrap_or(0)
    }

    /// Overwrite the point counter
    pub fn set_points(&self, points: u64) -> anyhow::Result<()> {
        let stored = i64::try_from(points).unwrap_or(i64::MAX);
        self.store.set_int(keys::ACTUAL_XP_POINTS, stored)
    }

    /// The out-of-band "show the prompt somewhere" flag
    pub fn remote_should_show(&self) -> bool {
        self.store.get_bool(keys::SHOULD_SHOW_RATING_MANAGER).unwrap_or(false)
    }

    /// Set the out-of-band flag
    pub fn set_remote_should_show(&self, flag: bool) -> anyhow::Result<()> {
        self.store.set_bool(keys::SHOULD_SHOW_RATING_MANAGER, flag)
    }

    /// Read all four fields at once
    pub fn snapshot(&self) -> RatingState {
        RatingState {
            last_checked: self.last_checked(),
            last_tested_version: self.last_tested_version(),
            points: self.points(),
            remote_should_show: self.remote_should_show(),
        }
    }
}
