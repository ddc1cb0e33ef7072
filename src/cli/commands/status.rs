//! Status command - show stored state and the current decision

use rategate::core::ports::AppContext;
use rategate::output::{OutputMode, StatusResult};

use crate::cli::session::Session;

/// Show the stored fields, the thresholds and the decision
pub fn status(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    let controller = &session.controller;
    let eligibility = controller.evaluate();

    StatusResult {
        current_version: controller.context().current_version().to_string(),
        state: controller.state(),
        policy: *controller.policy(),
        eligibility,
        eligible: eligibility.is_eligible(),
    }
    .render(mode);
    Ok(())
}
