//! Catalog port for schema introspection.

use crate::schema::Table;

/// Reads table definitions from a database catalog.
///
/// Abstracting the catalog lets generation run against a recorded snapshot
/// instead of a live database.
pub trait Catalog: Send + Sync {
    /// Returns every table in `schemas` with its columns in ordinal order.
    ///
    /// Tables are ordered by schema, then by table name.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be queried or a row cannot be decoded.
    fn tables(
        &self,
        schemas: &[String],
    ) -> Result<Vec<Table>, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the name of the database behind this catalog.
    fn database(&self) -> String;
}
