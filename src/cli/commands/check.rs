//! Check whether the prompt may be shown

use rategate::output::{DecisionResult, OutputMode};

use crate::cli::session::Session;

/// Print the decision; exits with status 1 when not eligible
pub fn check(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    let eligibility = session.controller.evaluate();
    let result = DecisionResult {
        eligible: eligibility.is_eligible(),
        eligibility,
    };
    result.render(mode);

    if !result.eligible {
        std::process::exit(1);
    }
    Ok(())
}
