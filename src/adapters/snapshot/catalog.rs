//! Catalog adapter that serves tables from a recorded snapshot.

use tracing::info;

use crate::ports::catalog::Catalog;
use crate::schema::{SchemaSnapshot, Table};

/// Serves the tables of a [`SchemaSnapshot`] in their recorded order.
pub struct SnapshotCatalog {
    snapshot: SchemaSnapshot,
}

impl SnapshotCatalog {
    /// Creates a catalog over a loaded snapshot.
    #[must_use]
    pub fn new(snapshot: SchemaSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Catalog for SnapshotCatalog {
    fn tables(
        &self,
        schemas: &[String],
    ) -> Result<Vec<Table>, Box<dyn std::error::Error + Send + Sync>> {
        let tables: Vec<Table> = self
            .snapshot
            .tables
            .iter()
            .filter(|t| schemas.iter().any(|s| *s == t.schema))
            .cloned()
            .collect();
        info!(
            tables = tables.len(),
            recorded_at = %self.snapshot.recorded_at,
            "loaded tables from snapshot"
        );
        Ok(tables)
    }

    fn database(&self) -> String {
        self.snapshot.database.clone()
    }
}
