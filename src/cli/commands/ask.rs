//! Ask the configured prompt on the terminal

use rategate::adapters::{ConsolePresenter, ConsoleReviewPrompter};
use rategate::core::services::Presentation;
use rategate::output::{OutputMode, PromptResult};

use crate::cli::session::Session;

/// Present the asker prompt (or request the review directly) if eligible
pub fn ask(session: &Session, direct: bool, mode: OutputMode) -> anyhow::Result<()> {
    let prompt = if direct {
        None
    } else {
        session.config.prompt.as_ref()
    };
    let reviewer = ConsoleReviewPrompter::new(session.config.review.url.clone());

    let presentation = session.controller.present_if_eligible(prompt, &ConsolePresenter, &reviewer)?;

    let result = match presentation {
        Presentation::Skipped(reason) => PromptResult {
            shown: false,
            outcome: None,
            skipped: Some(reason),
        },
        Presentation::ReviewRequested => PromptResult {
            shown: true,
            outcome: Some("requested".to_string()),
            skipped: None,
        },
        Presentation::Answered(outcome) => PromptResult {
            shown: true,
            outcome: Some(outcome.to_string()),
            skipped: None,
        },
    };
    result.render(mode);
    Ok(())
}
