//! Core domain logic for rategate
//!
//! This module contains the gating rules and the state they operate on.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RatingState`, `AppVersion`, `AskerPrompt`)
//! - `services/` - Eligibility policy, calendar math, state access, orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
