//! Domain models for rategate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RatingState`] - Snapshot of the four persisted gating fields
//! - [`AppVersion`] - Opaque `"<version>.<build>"` identity token
//! - [`AskerPrompt`] - Texts for the optional "would you rate us?" dialog
//! - [`PromptOutcome`] - What the user answered

mod prompt;
mod state;
mod version;

pub use prompt::{AskerPrompt, PromptOutcome};
pub use state::{RatingState, distant_past, keys};
pub use version::AppVersion;
