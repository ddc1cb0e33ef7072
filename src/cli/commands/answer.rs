//! Record an answer given outside the terminal

use rategate::PromptOutcome;
use rategate::core::services::Presentation;
use rategate::adapters::ConsoleReviewPrompter;
use rategate::output::{OutputMode, PromptResult};

use crate::cli::session::Session;

/// Apply `outcome` if eligible: accepting requests the review, both reset
/// the state
pub fn answer(session: &Session, outcome: PromptOutcome, mode: OutputMode) -> anyhow::Result<()> {
    let reviewer = ConsoleReviewPrompter::new(session.config.review.url.clone());
    let result = match session.controller.record_outcome(outcome, &reviewer)? {
        Presentation::Skipped(reason) => PromptResult {
            shown: false,
            outcome: None,
            skipped: Some(reason),
        },
        Presentation::Answered(_) | Presentation::ReviewRequested => PromptResult {
            shown: true,
            outcome: Some(outcome.to_string()),
            skipped: None,
        },
    };
    result.render(mode);
    Ok(())
}
