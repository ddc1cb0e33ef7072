//! rategate - Eligibility gating for rate-limited in-app prompts
//!
//! This library decides, from a handful of persisted fields, whether an app
//! may ask its user for a review right now, and records the outcome when it
//! does. Points accumulate as the user hits qualifying events; a prompt is
//! only allowed once per build, after enough points, and after a cooldown
//! measured in calendar months.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;

pub use crate::core::models::{AppVersion, AskerPrompt, PromptOutcome, RatingState};
pub use crate::core::services::{Eligibility, EligibilityPolicy, GatingController, PersistedState};
