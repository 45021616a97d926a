//! Column definition as reported by the catalog.

use serde::{Deserialize, Serialize};

/// A single column of an introspected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// 1-based position of the column within its table.
    pub ordinal_position: u32,
    /// Name of the table that owns the column.
    pub table_name: String,
    /// Raw SQL column name.
    pub column_name: String,
    /// Whether the column accepts `NULL`.
    pub is_nullable: bool,
    /// Internal type name (e.g. `int4`, `_varchar`). A leading `_` means "array of".
    pub sql_type: String,
    /// Column comment, empty when none is set.
    #[serde(default)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_comment_defaults_to_empty() {
        let yaml = "ordinal_position: 1\ntable_name: users\ncolumn_name: id\nis_nullable: false\nsql_type: int4\n";
        let column: Column = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(column.comment, "");
    }
}
