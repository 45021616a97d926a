//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{DiskFileSystem, LiveCatalog, ProcessExecutor, SystemClock};
use crate::adapters::snapshot::SnapshotCatalog;
use crate::config::ConnectionConfig;
use crate::ports::catalog::Catalog;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;
use crate::schema::SchemaSnapshot;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Dropping the
/// context releases the database connection, if one was opened.
pub struct ServiceContext {
    /// Catalog the schema is introspected from.
    pub catalog: Box<dyn Catalog>,
    /// Clock for the generation timestamp.
    pub clock: Box<dyn Clock>,
    /// Filesystem for reading snapshots and writing output.
    pub fs: Box<dyn FileSystem>,
    /// Executor for the source formatter.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a live context connected to the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn live(config: &ConnectionConfig) -> Result<Self, String> {
        let catalog = LiveCatalog::connect(config).map_err(|e| {
            format!("failed to connect to {}:{}/{}: {e}", config.host, config.port, config.dbname)
        })?;
        Ok(Self::with_catalog(Box::new(catalog)))
    }

    /// Creates a context whose catalog is served from a snapshot file.
    ///
    /// Clock, filesystem, and shell stay live.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed.
    pub fn from_snapshot(path: &Path) -> Result<Self, String> {
        let fs = DiskFileSystem;
        let content = fs
            .read_to_string(path)
            .map_err(|e| format!("failed to read snapshot {}: {e}", path.display()))?;
        let snapshot = SchemaSnapshot::from_yaml(&content)
            .map_err(|e| format!("failed to parse snapshot {}: {e}", path.display()))?;
        Ok(Self::with_catalog(Box::new(SnapshotCatalog::new(snapshot))))
    }

    /// Creates a context around `catalog` with live clock, filesystem, and shell.
    #[must_use]
    pub fn with_catalog(catalog: Box<dyn Catalog>) -> Self {
        Self {
            catalog,
            clock: Box::new(SystemClock),
            fs: Box::new(DiskFileSystem),
            shell: Box::new(ProcessExecutor),
        }
    }
}
