// ABOUTME: SQLite database introspection and data reading
// ABOUTME: Functions to list tables, read column metadata, and scan table rows

use crate::error::ExportError;
use crate::sqlite::converter::ColumnKind;
use rusqlite::types::Value;
use rusqlite::Connection;

/// A column as declared in the source table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Free-form type string from the schema, e.g. `VARCHAR(50)`
    pub declared_type: String,
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        let kind = ColumnKind::classify(&declared_type);
        Self {
            name: name.into(),
            declared_type,
            kind,
        }
    }
}

/// One row of a table scan, positionally aligned with the table's columns
pub type Row = Vec<Value>;

/// List all user tables in a SQLite database
///
/// Queries sqlite_master for user-created tables, excluding sqlite_*
/// system tables (sqlite_sequence, sqlite_stat1, etc.).
///
/// # Returns
///
/// Sorted vector of table names
pub fn list_tables(conn: &Connection) -> Result<Vec<String>, ExportError> {
    tracing::debug!("Listing tables from SQLite database");

    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type='table' \
         AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )?;

    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<String>, _>>()?;

    tracing::info!("Found {} user tables in SQLite database", tables.len());

    Ok(tables)
}

/// Read the ordered column list of a table
///
/// Uses `PRAGMA table_info`, which yields one `(cid, name, type, notnull,
/// dflt_value, pk)` tuple per column in declaration order. A table that does
/// not exist yields an empty list rather than an error.
///
/// # Security
///
/// The table name is interpolated as-is. Callers must not pass
/// untrusted input.
pub fn read_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnDescriptor>, ExportError> {
    tracing::debug!("Reading column metadata for table '{}'", table);

    let query = format!("PRAGMA table_info(\"{}\")", table);
    let mut stmt = conn.prepare(&query)?;

    let columns = stmt
        .query_map([], |row| {
            let name: String = row.get(1)?;
            let declared_type: String = row.get(2)?;
            Ok(ColumnDescriptor::new(name, declared_type))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Table '{}' has {} columns: {:?}",
        table,
        columns.len(),
        columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );

    Ok(columns)
}

/// Read all rows of a table with an unfiltered `SELECT *`
///
/// Rows come back in whatever order SQLite yields them; each row keeps the
/// table's native column order.
///
/// # Performance
///
/// Loads all rows into memory.
pub fn read_rows(conn: &Connection, table: &str) -> Result<Vec<Row>, ExportError> {
    tracing::info!("Reading all data from table '{}'", table);

    let query = format!("SELECT * FROM \"{}\"", table);
    let mut stmt = conn.prepare(&query)?;
    let width = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            (0..width)
                .map(|idx| row.get::<_, Value>(idx))
                .collect::<Result<Row, _>>()
        })?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Read {} rows from table '{}'", rows.len(), table);

    Ok(rows)
}
