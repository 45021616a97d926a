//! Table definition aggregating its columns.

use serde::{Deserialize, Serialize};

use super::column::Column;

/// An introspected table with its columns in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema the table lives in (e.g. `public`).
    pub schema: String,
    /// Raw SQL table name.
    pub name: String,
    /// Columns ordered by ordinal position.
    pub columns: Vec<Column>,
}

impl Table {
    /// Creates a table, ordering `columns` by ordinal position.
    ///
    /// The sort is stable, so already-ordered input is left untouched.
    #[must_use]
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        mut columns: Vec<Column>,
    ) -> Self {
        columns.sort_by_key(|c| c.ordinal_position);
        Self { schema: schema.into(), name: name.into(), columns }
    }

    /// Returns the schema-qualified name, e.g. `public.users`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}
