//! Accumulate points

use rategate::output::{OutputMode, PointsResult};

use crate::cli::session::Session;

/// Add `amount` points (negative removes, clamped at zero)
pub fn add_points(session: &Session, amount: i64, mode: OutputMode) -> anyhow::Result<()> {
    let total = session.controller.add_points(amount)?;
    PointsResult {
        added: amount,
        total,
        needed: session.controller.policy().minimum_points,
    }
    .render(mode);
    Ok(())
}
