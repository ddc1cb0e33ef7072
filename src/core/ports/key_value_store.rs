//! Key-value store port
//!
//! Defines the typed persistence the gate reads and writes.

use chrono::{DateTime, Utc};

/// Typed key-value persistence
///
/// Reads return `None` when the key is missing or holds a value of another
/// type; callers substitute their own defaults. Each write touches a single
/// key and is expected to be atomic on its own.
pub trait KeyValueStore {
    /// Read a string value
    fn get_string(&self, key: &str) -> Option<String>;

    /// Write a string value
    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Read an integer value
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Write an integer value
    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()>;

    /// Read a boolean value
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Write a boolean value
    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()>;

    /// Read a timestamp value
    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>>;

    /// Write a timestamp value
    fn set_timestamp(&self, key: &str, value: DateTime<Utc>) -> anyhow::Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_string(key, value)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()> {
        (**self).set_int(key, value)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }

    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()> {
        (**self).set_bool(key, value)
    }

    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        (**self).get_timestamp(key)
    }

    fn set_timestamp(&self, key: &str, value: DateTime<Utc>) -> anyhow::Result<()> {
        (**self).set_timestamp(key, value)
    }
}
