//! Recorded catalog results that can stand in for a live database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::table::Table;

/// A catalog result captured at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Name of the database the snapshot was taken from.
    pub database: String,
    /// When the snapshot was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Schemas that were introspected.
    pub schemas: Vec<String>,
    /// Tables in introspection order.
    pub tables: Vec<Table>,
}

impl SchemaSnapshot {
    /// Parses a snapshot from YAML, re-establishing column order on every table.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a snapshot.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut snapshot: Self = serde_yaml::from_str(yaml)?;
        snapshot.tables = snapshot
            .tables
            .into_iter()
            .map(|t| Table::new(t.schema, t.name, t.columns))
            .collect();
        Ok(snapshot)
    }

    /// Serializes the snapshot as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
