//! Out-of-band "show the prompt somewhere" flag

use rategate::output::{OperationResult, OutputMode};

use crate::cli::app::RemoteAction;
use crate::cli::session::Session;

/// Set, clear or print the flag
pub fn remote(session: &Session, action: RemoteAction, mode: OutputMode) -> anyhow::Result<()> {
    let controller = &session.controller;
    match action {
        RemoteAction::On => controller.set_remote_should_show(true)?,
        RemoteAction::Off => controller.set_remote_should_show(false)?,
        RemoteAction::Show => {},
    }

    let flag = controller.remote_should_show();
    if mode == OutputMode::Json && action == RemoteAction::Show {
        println!("{}", serde_json::json!({ "remote_should_show": flag }));
        return Ok(());
    }

    OperationResult::ok(format!("Remote flag: {}", if flag { "on" } else { "off" })).render(mode);
    Ok(())
}
