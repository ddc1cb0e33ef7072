//! Write a starter configuration

use std::path::Path;

use rategate::config::RategateConfig;
use rategate::output::{OperationResult, OutputMode};

/// Write the starter config to `path`
///
/// An existing file is left alone unless `force` is set.
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        };
        result.render(mode);
        return Ok(());
    }

    RategateConfig::starter().save_to(path)?;
    log::info!("Wrote config to {}", path.display());
    OperationResult::ok(format!("Created {}", path.display())).render(mode);
    Ok(())
}
