//! Generate Go struct declarations from a PostgreSQL schema.
//!
//! The pipeline is catalog rows → [`schema::Table`] → [`codegen`] → file.
//! Name and type mapping live in [`codegen::naming`] and [`codegen::types`].

pub mod adapters;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod schema;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests print to stdout and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
