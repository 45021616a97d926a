//! Go declaration rendering for introspected tables.

use std::fmt::Write;

use tracing::{debug, warn};

use super::naming::normalize;
use super::types::map_type;
use crate::schema::{Column, Table};

/// Renders one struct declaration block for `table`.
///
/// Fields appear in the table's column order, each tagged with its
/// normalized name and commented with the raw `table.column` reference.
#[must_use]
pub fn render_table(table: &Table) -> String {
    let ident = normalize(&table.name);
    let mut out = String::new();
    let _ = writeln!(out, "// {ident} - [{}] SQL table", table.qualified_name());
    let _ = writeln!(out, "type {ident} struct {{");
    for column in &table.columns {
        out.push_str(&render_field(column));
    }
    out.push_str("}\n");
    out
}

/// Renders the full document: package header followed by every table block.
///
/// Tables are emitted in the order given. Tables without columns are skipped.
#[must_use]
pub fn render_document(package: &str, tables: &[Table]) -> String {
    let mut out = format!("package {package}\nimport \"time\"\n\n");
    for table in tables {
        if table.columns.is_empty() {
            warn!(table = %table.qualified_name(), "skipping table without columns");
            continue;
        }
        debug!(table = %table.qualified_name(), columns = table.columns.len(), "rendering table");
        out.push_str(&render_table(table));
    }
    out
}

fn render_field(column: &Column) -> String {
    let name = normalize(&column.column_name);
    let go_type = map_type(&column.sql_type, column.is_nullable);
    let mut line = format!(
        "{name} {go_type} `json:\"{name}\"` // [{}.{}]",
        column.table_name, column.column_name
    );
    if !column.comment.is_empty() {
        line.push(' ');
        line.push_str(&column.comment);
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(position: u32, name: &str, sql_type: &str, nullable: bool, comment: &str) -> Column {
        Column {
            ordinal_position: position,
            table_name: "user_accounts".into(),
            column_name: name.into(),
            is_nullable: nullable,
            sql_type: sql_type.into(),
            comment: comment.into(),
        }
    }

    fn user_accounts() -> Table {
        Table::new(
            "public",
            "user_accounts",
            vec![
                column(1, "id", "int4", false, "primary key"),
                column(2, "email", "varchar", false, ""),
                column(3, "created_at", "timestamptz", true, ""),
                column(4, "tags", "_text", true, ""),
            ],
        )
    }

    #[test]
    fn renders_user_accounts_block() {
        let expected = "\
// UserAccounts - [public.user_accounts] SQL table
type UserAccounts struct {
ID int64 `json:\"ID\"` // [user_accounts.id] primary key
Email string `json:\"Email\"` // [user_accounts.email]
CreatedAt *time.Time `json:\"CreatedAt\"` // [user_accounts.created_at]
Tags []string `json:\"Tags\"` // [user_accounts.tags]
}
";
        assert_eq!(render_table(&user_accounts()), expected);
    }

    #[test]
    fn tag_uses_normalized_name() {
        let table = Table::new("public", "t", vec![column(1, "owner_uuid", "uuid", true, "")]);
        let block = render_table(&table);
        assert!(block.contains("OwnerUUID interface{} `json:\"OwnerUUID\"`"));
        assert!(!block.contains("json:\"owner_uuid\""));
    }

    #[test]
    fn comment_is_copied_verbatim() {
        let note = column(1, "note", "text", false, "free-form, `raw` text");
        let table = Table::new("public", "t", vec![note]);
        assert!(render_table(&table).contains("// [user_accounts.note] free-form, `raw` text\n"));
    }

    #[test]
    fn rendering_is_stable() {
        let table = user_accounts();
        assert_eq!(render_table(&table), render_table(&table));
    }

    #[test]
    fn document_has_header_and_keeps_table_order() {
        let zebra = Table::new("public", "zebra", vec![column(1, "id", "int4", false, "")]);
        let apple = Table::new("public", "apple", vec![column(1, "id", "int4", false, "")]);
        let doc = render_document("models", &[zebra, apple]);

        assert!(doc.starts_with("package models\nimport \"time\"\n\n"));
        let zebra_at = doc.find("type Zebra struct").unwrap();
        let apple_at = doc.find("type Apple struct").unwrap();
        assert!(zebra_at < apple_at);
    }

    #[test]
    fn document_skips_tables_without_columns() {
        let empty = Table::new("public", "empty", Vec::new());
        let doc = render_document("models", &[empty, user_accounts()]);
        assert!(!doc.contains("Empty"));
        assert!(doc.contains("type UserAccounts struct"));
    }

    #[test]
    fn empty_document_is_just_the_header() {
        assert_eq!(render_document("db", &[]), "package db\nimport \"time\"\n\n");
    }
}
