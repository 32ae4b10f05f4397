// ABOUTME: Error types for SQLite to PostgreSQL export
// ABOUTME: Separates fatal process-level failures from per-table failures

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while exporting a SQLite table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The source database path is missing or not a regular file
    #[error("Database file not found: {}", .0.display())]
    Configuration(PathBuf),

    /// The source database exists but cannot be opened or read
    #[error("Failed to open SQLite database '{}': {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The requested table has no columns (absent or empty schema)
    #[error("Table {0} has no columns or doesn't exist")]
    Schema(String),

    /// A cell could not be coerced to the type implied by its column
    #[error("Cannot convert {value} to {target} for column '{column}'")]
    TypeConversion {
        column: String,
        target: &'static str,
        value: String,
    },

    /// A row returned by the scan does not line up with the column metadata
    #[error("Table {table} returned {actual} values per row but declares {expected} columns")]
    ColumnMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Metadata or row query failed
    #[error("SQLite query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

impl ExportError {
    /// Create a TypeConversion error
    pub fn conversion(
        column: impl Into<String>,
        target: &'static str,
        value: impl Into<String>,
    ) -> Self {
        ExportError::TypeConversion {
            column: column.into(),
            target,
            value: value.into(),
        }
    }
}
