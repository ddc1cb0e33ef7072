//! App version token
//!
//! The gate never asks twice within the same build, so the token combines the
//! marketing version with the build number. Tokens are compared for equality
//! only; "1.10.0.3" is not considered newer than "1.9.0.7".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque `"<version>.<build>"` identity of the running app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppVersion(String);

impl AppVersion {
    /// Token recorded before any prompt has ever been shown
    pub const UNTESTED: &'static str = "0.0.0.0";

    /// Build the token from a short version and a build number
    ///
    /// ```
    /// use rategate::AppVersion;
    ///
    /// let v = AppVersion::from_parts("2.3", "41");
    /// assert_eq!(v.as_str(), "2.3.41");
    /// ```
    #[must_use]
    pub fn from_parts(short_version: &str, build: &str) -> Self {
        Self(format!("{short_version}.{build}"))
    }

    /// Wrap an already concatenated token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the "never tested" placeholder
    #[must_use]
    pub fn is_untested(&self) -> bool {
        self.0 == Self::UNTESTED
    }
}

impl Default for AppVersion {
    fn default() -> Self {
        Self(Self::UNTESTED.to_string())
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppVersion {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AppVersion {
    fn from(token: String) -> Self {
        Self(token)
    }
}
