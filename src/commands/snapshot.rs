//! `pgstructgen snapshot` command.

use tracing::info;

use crate::cli::SnapshotArgs;
use crate::context::ServiceContext;
use crate::schema::SchemaSnapshot;

/// Execute the `snapshot` command against the configured database.
///
/// # Errors
///
/// Returns an error string if connecting, introspection, or writing fails.
pub fn run(args: &SnapshotArgs) -> Result<(), String> {
    let ctx = super::context_for(None)?;
    let snapshot = record(&ctx, args)?;
    println!("Recorded {} tables to {}", snapshot.tables.len(), args.output.display());
    Ok(())
}

/// Introspects the catalog and writes the result as a YAML snapshot.
///
/// # Errors
///
/// Returns an error string if introspection, serialization, or writing fails.
pub fn record(ctx: &ServiceContext, args: &SnapshotArgs) -> Result<SchemaSnapshot, String> {
    let database = ctx.catalog.database();
    let tables = ctx
        .catalog
        .tables(&args.schemas)
        .map_err(|e| format!("failed to introspect {database}: {e}"))?;

    let snapshot = SchemaSnapshot {
        database,
        recorded_at: ctx.clock.now(),
        schemas: args.schemas.clone(),
        tables,
    };
    let yaml = snapshot.to_yaml().map_err(|e| format!("failed to serialize snapshot: {e}"))?;
    ctx.fs
        .write(&args.output, &yaml)
        .map_err(|e| format!("failed to write snapshot {}: {e}", args.output.display()))?;
    info!(path = %args.output.display(), tables = snapshot.tables.len(), "recorded snapshot");

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::adapters::snapshot::SnapshotCatalog;
    use crate::schema::{Column, Table};

    #[test]
    fn recorded_snapshot_replays_the_same_tables() {
        let dir = std::env::temp_dir().join("pgstructgen_snapshot_cmd_test");
        let source = SchemaSnapshot {
            database: "shop".into(),
            recorded_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            schemas: vec!["public".into()],
            tables: vec![Table::new(
                "public",
                "orders",
                vec![Column {
                    ordinal_position: 1,
                    table_name: "orders".into(),
                    column_name: "total".into(),
                    is_nullable: true,
                    sql_type: "numeric".into(),
                    comment: "in cents".into(),
                }],
            )],
        };
        let ctx = ServiceContext::with_catalog(Box::new(SnapshotCatalog::new(source.clone())));
        let args = SnapshotArgs { schemas: vec!["public".into()], output: dir.join("schema.yaml") };

        let recorded = record(&ctx, &args).unwrap();
        assert_eq!(recorded.database, "shop");
        assert_eq!(recorded.tables, source.tables);

        let replayed = ServiceContext::from_snapshot(&args.output).unwrap();
        assert_eq!(replayed.catalog.tables(&args.schemas).unwrap(), source.tables);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_failure_is_reported() {
        let ctx = ServiceContext::with_catalog(Box::new(SnapshotCatalog::new(SchemaSnapshot {
            database: "shop".into(),
            recorded_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            schemas: Vec::new(),
            tables: Vec::new(),
        })));
        let args = SnapshotArgs {
            schemas: vec!["public".into()],
            output: PathBuf::from("/proc/pgstructgen/schema.yaml"),
        };

        let err = record(&ctx, &args).unwrap_err();
        assert!(err.contains("failed to write snapshot"));
        assert!(!Path::new("/proc/pgstructgen").exists());
    }
}
