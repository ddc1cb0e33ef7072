//! Gating services
//!
//! - [`calendar`] - Whole calendar-month differences
//! - [`eligibility`] - The pure "may we ask now?" decision
//! - [`persisted_state`] - Typed access to the stored fields
//! - [`controller`] - Ask / respond / reset orchestration

pub mod calendar;
pub mod controller;
pub mod eligibility;
pub mod persisted_state;

pub use calendar::whole_months_between;
pub use controller::{GatingController, Presentation};
pub use eligibility::{DEFAULT_MINIMUM_MONTHS, DEFAULT_MINIMUM_POINTS, Eligibility, EligibilityPolicy};
pub use persisted_state::PersistedState;
