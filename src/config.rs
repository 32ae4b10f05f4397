// ABOUTME: Export run configuration built from CLI arguments
// ABOUTME: Holds the source database path and the table to export

use std::path::{Path, PathBuf};

/// Conventional location of the application database, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "database/database.db";

/// Table exported by the command-line tool
pub const DEFAULT_TABLE: &str = "TIPI_UTENTE";

/// Settings for a single export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub db_path: PathBuf,
    pub table: String,
}

impl ExportConfig {
    /// Creates a config exporting the default table from `db_path`
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Exports `table` instead of the default table
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
