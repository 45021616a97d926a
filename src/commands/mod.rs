//! Command dispatch and handlers.

pub mod generate;
pub mod snapshot;

use std::path::Path;

use crate::cli::Command;
use crate::config::ConnectionConfig;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Snapshot(args) => snapshot::run(args),
    }
}

/// Builds the service context for a command.
///
/// A snapshot path selects the offline catalog; otherwise the connection is
/// configured from the environment. The connection lives as long as the
/// returned context.
fn context_for(snapshot: Option<&Path>) -> Result<ServiceContext, String> {
    match snapshot {
        Some(path) => ServiceContext::from_snapshot(path),
        None => ServiceContext::live(&ConnectionConfig::from_env()?),
    }
}
