//! Reset the gating state

use rategate::output::{OperationResult, OutputMode};

use crate::cli::session::Session;

/// Stamp the state as "just prompted" for the running build
pub fn reset(session: &Session, mode: OutputMode) -> anyhow::Result<()> {
    session.controller.reset_state()?;
    OperationResult::ok("State reset.").render(mode);
    Ok(())
}
