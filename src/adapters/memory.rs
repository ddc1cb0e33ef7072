//! In-memory key-value store
//!
//! Nothing survives the process. Useful for tests and for hosts that keep
//! the state elsewhere and only need a scratch store.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::StoredValue;
use crate::core::ports::KeyValueStore;

/// Key-value store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to a stored value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<StoredValue> {
        self.values.borrow().get(key).cloned()
    }

    /// Store a raw value
    pub fn insert(&self, key: &str, value: StoredValue) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }

    /// Drop a key, as an external storage clear would
    pub fn remove(&self, key: &str) -> Option<StoredValue> {
        self.values.borrow_mut().remove(key)
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).and_then(StoredValue::as_string)
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.insert(key, StoredValue::String(value.to_string()));
        Ok(())
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.borrow().get(key).and_then(StoredValue::as_int)
    }

    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()> {
        self.insert(key, StoredValue::Int(value));
        Ok(())
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.borrow().get(key).and_then(StoredValue::as_bool)
    }

    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()> {
        self.insert(key, StoredValue::Bool(value));
        Ok(())
    }

    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.values.borrow().get(key).and_then(StoredValue::as_timestamp)
    }

    fn set_timestamp(&self, key: &str, value: DateTime<Utc>) -> anyhow::Result<()> {
        self.insert(key, StoredValue::Timestamp(value));
        Ok(())
    }
}
