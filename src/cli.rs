//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `pgstructgen`.
#[derive(Debug, Parser)]
#[command(name = "pgstructgen", version, about = "Generate Go structs from a PostgreSQL schema")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write one Go struct per table to a source file.
    Generate(GenerateArgs),
    /// Record the introspected schema to a YAML snapshot.
    Snapshot(SnapshotArgs),
}

/// Options for `pgstructgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema to introspect; may be repeated.
    #[arg(long = "schema", value_name = "SCHEMA", default_value = "public")]
    pub schemas: Vec<String>,

    /// Go package name for the generated file.
    #[arg(long, default_value = "models")]
    pub package: String,

    /// Output file path.
    #[arg(long, short, default_value = "models_genpg.go")]
    pub output: PathBuf,

    /// Read the schema from a snapshot instead of connecting to a database.
    #[arg(long, value_name = "FILE")]
    pub from_snapshot: Option<PathBuf>,

    /// Formatter command; the output path is appended as its last argument.
    #[arg(long, default_value = "gofmt -s -w")]
    pub formatter: String,

    /// Skip running the formatter.
    #[arg(long)]
    pub no_fmt: bool,
}

/// Options for `pgstructgen snapshot`.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Schema to introspect; may be repeated.
    #[arg(long = "schema", value_name = "SCHEMA", default_value = "public")]
    pub schemas: Vec<String>,

    /// Snapshot file to write.
    #[arg(long, short)]
    pub output: PathBuf,
}
