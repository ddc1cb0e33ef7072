//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the gating logic and the
//! host app: durable storage, the clock and app identity, the platform
//! review request, and whatever UI renders the asker prompt.
//!
//! Implementations live in the `adapters` module; tests supply their own.

mod app_context;
mod key_value_store;
mod presenter;

pub use app_context::AppContext;
pub use key_value_store::KeyValueStore;
pub use presenter::{PromptPresenter, ReviewPrompter};
