// ABOUTME: Builds PostgreSQL INSERT statements from a SQLite table
// ABOUTME: Reads column metadata and rows once, then formats one statement per row

use crate::error::ExportError;
use crate::sqlite::converter::format_value;
use crate::sqlite::reader::{self, ColumnDescriptor};
use rusqlite::types::Value;
use rusqlite::Connection;

/// Build a single `INSERT` statement for one row
///
/// Table and column names are emitted verbatim, without identifier quoting.
///
/// # Errors
///
/// Fails with `ExportError::ColumnMismatch` if the row width differs from
/// the column list, or `ExportError::TypeConversion` if any cell cannot be
/// formatted for its column.
///
/// # Examples
///
/// ```
/// # use sqlite_pg_export::export::build_insert_statement;
/// # use sqlite_pg_export::sqlite::reader::ColumnDescriptor;
/// # use rusqlite::types::Value;
/// let columns = vec![
///     ColumnDescriptor::new("ID", "INTEGER"),
///     ColumnDescriptor::new("NOME", "TEXT"),
/// ];
/// let row = vec![Value::Integer(1), Value::Text("Admin".to_string())];
/// let stmt = build_insert_statement("TIPI_UTENTE", &columns, &row).unwrap();
/// assert_eq!(stmt, "INSERT INTO TIPI_UTENTE (ID, NOME) VALUES (1, 'Admin');");
/// ```
pub fn build_insert_statement(
    table: &str,
    columns: &[ColumnDescriptor],
    row: &[Value],
) -> Result<String, ExportError> {
    if row.len() != columns.len() {
        return Err(ExportError::ColumnMismatch {
            table: table.to_string(),
            expected: columns.len(),
            actual: row.len(),
        });
    }

    let column_names = columns
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let values = columns
        .iter()
        .zip(row)
        .map(|(column, value)| format_value(value, column))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table, column_names, values
    ))
}

/// Export every row of a table as an `INSERT` statement
///
/// Column metadata is fetched once, then all rows with an unfiltered scan.
/// Statements come back in scan order.
///
/// # Returns
///
/// - `Err(ExportError::Schema)` if the table has no columns or does not exist
/// - `Ok(vec![])` if the table has no rows
/// - the first query or conversion error otherwise; statements already built
///   for earlier rows are dropped
///
/// # Security
///
/// The table name is interpolated into queries and statements as-is.
pub fn export_table(conn: &Connection, table: &str) -> Result<Vec<String>, ExportError> {
    let columns = reader::read_columns(conn, table)?;
    if columns.is_empty() {
        return Err(ExportError::Schema(table.to_string()));
    }

    let rows = reader::read_rows(conn, table)?;
    if rows.is_empty() {
        tracing::info!("Table '{}' is empty", table);
        return Ok(Vec::new());
    }

    let statements = rows
        .iter()
        .map(|row| build_insert_statement(table, &columns, row))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        "Built {} INSERT statements for table '{}'",
        statements.len(),
        table
    );

    Ok(statements)
}
