//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `memory` - In-process key-value store
//! - `json_file` - Durable key-value store in a single JSON document
//! - `system` - Wall clock plus a configured app version
//! - `console` - Terminal renditions of the asker prompt and review request

pub mod console;
pub mod json_file;
pub mod memory;
pub mod system;
mod value;

pub use console::{ConsolePresenter, ConsoleReviewPrompter};
pub use json_file::{JsonFileStore, StoreError};
pub use memory::MemoryStore;
pub use system::SystemContext;
pub use value::StoredValue;
