// ABOUTME: SQLite database access for exporting to PostgreSQL
// ABOUTME: Provides file path validation and read-only database connections

pub mod converter;
pub mod reader;

use crate::error::ExportError;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Validate that a SQLite file path points at an existing regular file
///
/// Canonicalizes the path so that relative paths and symlinks are resolved
/// before the database is opened.
///
/// # Arguments
///
/// * `path` - Path to SQLite file (can be relative or absolute)
///
/// # Returns
///
/// Canonicalized absolute path if valid, `ExportError::Configuration` otherwise
///
/// # Examples
///
/// ```no_run
/// # use sqlite_pg_export::sqlite::validate_sqlite_path;
/// assert!(validate_sqlite_path("database/database.db").is_ok());
/// assert!(validate_sqlite_path("/nonexistent.db").is_err());
/// ```
pub fn validate_sqlite_path(path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ExportError::Configuration(path.to_path_buf()));
    }

    // Also fails when the file does not exist
    let canonical = path
        .canonicalize()
        .map_err(|_| ExportError::Configuration(path.to_path_buf()))?;

    if !canonical.is_file() {
        return Err(ExportError::Configuration(path.to_path_buf()));
    }

    tracing::debug!("Validated SQLite path: {}", canonical.display());

    Ok(canonical)
}

/// Open a SQLite database in read-only mode
///
/// The path is validated first. After opening, the schema table is read once
/// so that a corrupt or non-SQLite file is reported here rather than on the
/// first export query.
///
/// # Examples
///
/// ```no_run
/// # use sqlite_pg_export::sqlite::open_sqlite;
/// # fn example() -> Result<(), sqlite_pg_export::error::ExportError> {
/// let conn = open_sqlite("database/database.db")?;
/// # Ok(())
/// # }
/// ```
pub fn open_sqlite(path: impl AsRef<Path>) -> Result<Connection, ExportError> {
    let canonical = validate_sqlite_path(path)?;

    tracing::info!("Opening SQLite database: {}", canonical.display());

    let connection_error = |source| ExportError::Connection {
        path: canonical.clone(),
        source,
    };

    let conn = Connection::open_with_flags(&canonical, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(connection_error)?;

    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(connection_error)?;

    tracing::debug!("Successfully opened SQLite database");

    Ok(conn)
}
