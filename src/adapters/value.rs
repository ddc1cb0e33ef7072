//! Typed values held by the bundled stores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single stored value, tagged with its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StoredValue {
    /// UTF-8 text
    String(String),
    /// Signed integer
    Int(i64),
    /// Boolean
    Bool(bool),
    /// UTC instant, stored as RFC 3339
    Timestamp(DateTime<Utc>),
}

impl StoredValue {
    /// The text, if this is a string
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// The integer, if this is an int
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The flag, if this is a bool
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The instant, if this is a timestamp
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}
