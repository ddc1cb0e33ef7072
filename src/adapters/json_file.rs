//! JSON file key-value store
//!
//! All keys live in one pretty-printed JSON object:
//!
//! ```json
//! {
//!   "ActualXPPointsKey": { "type": "int", "value": 120 },
//!   "TestedAppVersionKey": { "type": "string", "value": "1.4.0.12" }
//! }
//! ```
//!
//! Every write rewrites the document through a temporary file and a rename,
//! so a single-key update is atomic on the same filesystem.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::warn;
use thiserror::Error;

use super::StoredValue;
use crate::core::ports::KeyValueStore;

type Document = BTreeMap<String, StoredValue>;

/// Errors raised while persisting the state file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the file failed
    #[error("state file {path}: {source}")]
    Io {
        /// The state file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded
    #[error("encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store persisted as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use (or later create) the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole document
    ///
    /// A missing file is an empty document. An unreadable or malformed one
    /// is logged and treated as empty too, so reads fall back to defaults.
    #[must_use]
    pub fn load(&self) -> BTreeMap<String, StoredValue> {
        if !self.path.exists() {
            return Document::new();
        }
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Document::new(),
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed state file {}: {e}", self.path.display());
                Document::new()
            }),
            Err(e) => {
                warn!("Cannot read state file {}: {e}", self.path.display());
                Document::new()
            },
        }
    }

    /// Remove the backing file
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| self.io_error(source))?;
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<StoredValue> {
        self.load().remove(key)
    }

    fn put(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        let mut doc = self.load();
        doc.insert(key.to_string(), value);
        self.save(&doc)
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let content = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).as_ref().and_then(StoredValue::as_string)
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        Ok(self.put(key, StoredValue::String(value.to_string()))?)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).as_ref().and_then(StoredValue::as_int)
    }

    fn set_int(&self, key: &str, value: i64) -> anyhow::Result<()> {
        Ok(self.put(key, StoredValue::Int(value))?)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).as_ref().and_then(StoredValue::as_bool)
    }

    fn set_bool(&self, key: &str, value: bool) -> anyhow::Result<()> {
        Ok(self.put(key, StoredValue::Bool(value))?)
    }

    fn get_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key).as_ref().and_then(StoredValue::as_timestamp)
    }

    fn set_timestamp(&self, key: &str, value: DateTime<Utc>) -> anyhow::Result<()> {
        Ok(self.put(key, StoredValue::Timestamp(value))?)
    }
}
