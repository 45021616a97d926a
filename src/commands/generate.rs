//! `pgstructgen generate` command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::GenerateArgs;
use crate::codegen::render_document;
use crate::context::ServiceContext;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path the document was written to.
    pub output: PathBuf,
    /// Number of tables rendered.
    pub tables: usize,
    /// Whether the formatter ran.
    pub formatted: bool,
}

/// Execute the `generate` command.
///
/// Uses the snapshot named by `--from-snapshot` when given, otherwise
/// connects to the database configured in the environment.
///
/// # Errors
///
/// Returns an error string if configuration, introspection, writing, or
/// formatting fails.
pub fn run(args: &GenerateArgs) -> Result<(), String> {
    let ctx = super::context_for(args.from_snapshot.as_deref())?;
    let report = generate(&ctx, args)?;
    println!("Generated {} structs in {}", report.tables, report.output.display());
    Ok(())
}

/// Introspects, renders, writes, and formats the output file.
///
/// # Errors
///
/// Returns an error string if any step fails. A formatter failure is
/// reported after the file has been written in full.
pub fn generate(ctx: &ServiceContext, args: &GenerateArgs) -> Result<GenerateReport, String> {
    let tables = ctx
        .catalog
        .tables(&args.schemas)
        .map_err(|e| format!("failed to introspect {}: {e}", ctx.catalog.database()))?;

    let rendered = tables.iter().filter(|t| !t.columns.is_empty()).count();
    let document = format!(
        "// created at {}\n{}",
        ctx.clock.now().to_rfc3339(),
        render_document(&args.package, &tables)
    );

    ctx.fs
        .write(&args.output, &document)
        .map_err(|e| format!("failed to write {}: {e}", args.output.display()))?;
    info!(path = %args.output.display(), tables = rendered, "wrote generated structs");

    let formatted = if args.no_fmt {
        false
    } else {
        format(ctx, &args.formatter, &args.output)?;
        true
    };

    Ok(GenerateReport { output: args.output.clone(), tables: rendered, formatted })
}

/// Runs the formatter command on `path`.
fn format(ctx: &ServiceContext, formatter: &str, path: &Path) -> Result<(), String> {
    let mut words = formatter.split_whitespace().map(String::from);
    let program = words.next().ok_or("formatter command is empty")?;
    let mut args: Vec<String> = words.collect();
    args.push(path.display().to_string());

    let output = ctx
        .shell
        .run(&program, &args)
        .map_err(|e| format!("failed to run formatter: {e}"))?;
    if !output.success() {
        return Err(format!(
            "formatter {program} exited with status {}: {}",
            output.exit_code,
            output.stderr.trim()
        ));
    }
    info!(formatter = %program, path = %path.display(), "formatted output");
    Ok(())
}
