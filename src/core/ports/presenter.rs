//! Presentation ports
//!
//! The gate never draws anything itself. It hands prompt texts to a
//! [`PromptPresenter`] and fires the platform request through a
//! [`ReviewPrompter`].

use crate::core::models::{AskerPrompt, PromptOutcome};

/// Platform review request
///
/// Fire and forget: the platform may silently suppress the request under its
/// own rate limits, so nothing is reported back.
pub trait ReviewPrompter {
    /// Ask the platform to show its review UI
    fn request_review(&self);
}

/// Renders an [`AskerPrompt`] and reports the answer
pub trait PromptPresenter {
    /// Show the prompt and wait for one of its two outcomes
    fn present(&self, prompt: &AskerPrompt) -> PromptOutcome;
}
