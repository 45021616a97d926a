//! Live catalog adapter querying PostgreSQL's `information_schema`.

use std::sync::Mutex;

use postgres::{Client, NoTls};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::ports::catalog::Catalog;
use crate::schema::{Column, Table};

/// One table per row, aggregated by the query.
#[derive(Debug, Deserialize)]
struct Row {
    schema: String,
    name: String,
    columns: Vec<Column>,
}

/// Catalog backed by a single blocking connection.
///
/// The connection is closed when the adapter is dropped.
pub struct LiveCatalog {
    client: Mutex<Client>,
    database: String,
}

impl LiveCatalog {
    /// Opens a connection using `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or rejects the login.
    pub fn connect(config: &ConnectionConfig) -> Result<Self, postgres::Error> {
        debug!(host = %config.host, port = config.port, dbname = %config.dbname, "connecting");
        let client = config.to_postgres().connect(NoTls)?;
        Ok(Self { client: Mutex::new(client), database: config.dbname.clone() })
    }
}

impl Catalog for LiveCatalog {
    fn tables(
        &self,
        schemas: &[String],
    ) -> Result<Vec<Table>, Box<dyn std::error::Error + Send + Sync>> {
        let query = include_str!("queries/columns.sql");

        let rows = {
            let mut client = self.client.lock().map_err(|_| "catalog connection lock poisoned")?;
            client.query(query, &[&schemas])?
        };

        let mut tables = Vec::with_capacity(rows.len());
        for row in rows {
            let definition: serde_json::Value = row.try_get(0)?;
            let row: Row = serde_json::from_value(definition)?;
            tables.push(Table::new(row.schema, row.name, row.columns));
        }

        info!(tables = tables.len(), schemas = ?schemas, "introspected catalog");
        Ok(tables)
    }

    fn database(&self) -> String {
        self.database.clone()
    }
}
