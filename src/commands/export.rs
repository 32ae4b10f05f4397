// ABOUTME: Export command writing PostgreSQL INSERT statements for one SQLite table
// ABOUTME: Prints the SQL comment banner, per-table diagnostics, and statements to a writer

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::export::export_table;
use crate::sqlite;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::io::Write;

const BANNER_RULE: &str = "-- ========================================";

/// Outcome of an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub table: String,
    /// Number of INSERT statements written
    pub statements: usize,
}

/// Export the configured table as SQL text written to `out`
///
/// Opening the database is the only fatal step: a missing file or an
/// unreadable database is returned as an error before anything is written.
/// Table-level problems (missing table, empty table, a value that cannot be
/// converted) become `--` comment lines and the run still succeeds with zero
/// statements.
///
/// # Examples
///
/// ```no_run
/// # use sqlite_pg_export::commands::export;
/// # use sqlite_pg_export::config::ExportConfig;
/// # fn example() -> anyhow::Result<()> {
/// let config = ExportConfig::new("database/database.db");
/// let summary = export(&config, &mut std::io::stdout().lock())?;
/// eprintln!("{} statements", summary.statements);
/// # Ok(())
/// # }
/// ```
pub fn export<W: Write>(config: &ExportConfig, out: &mut W) -> Result<ExportSummary> {
    let conn = sqlite::open_sqlite(&config.db_path)?;

    let generated_on = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let result = write_export(&conn, config, &generated_on, out);

    // Close even when writing failed; a write error takes precedence
    let closed = conn
        .close()
        .map_err(|(_, e)| e)
        .context("Failed to close SQLite database");
    let summary = result?;
    closed?;

    tracing::debug!("Closed SQLite database");

    Ok(summary)
}

/// Write the full export for an already opened database
pub fn write_export<W: Write>(
    conn: &Connection,
    config: &ExportConfig,
    generated_on: &str,
    out: &mut W,
) -> Result<ExportSummary> {
    let table = config.table.as_str();
    let mut summary = ExportSummary {
        table: table.to_string(),
        statements: 0,
    };

    let tables = sqlite::reader::list_tables(conn).context("Failed to list SQLite tables")?;
    if tables.is_empty() {
        tracing::warn!("No tables found in {}", config.db_path.display());
        writeln!(out, "-- No tables found in database")?;
        return Ok(summary);
    }

    write_banner(out, table, &config.db_path.display().to_string(), generated_on)?;

    writeln!(out, "-- Exporting table: {}", table)?;
    writeln!(out, "-- {}", "=".repeat(50))?;

    let statements = export_table_with_diagnostics(conn, table, out)?;

    if statements.is_empty() {
        writeln!(out, "-- No data to export from {}", table)?;
    } else {
        for stmt in &statements {
            writeln!(out, "{}", stmt)?;
        }
        writeln!(out, "-- {} rows inserted into {}", statements.len(), table)?;
    }
    writeln!(out)?;
    out.flush()?;

    summary.statements = statements.len();
    Ok(summary)
}

/// Header announcing the run, source path and timestamp
pub fn write_banner<W: Write>(
    out: &mut W,
    table: &str,
    db_path: &str,
    generated_on: &str,
) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "-- PostgreSQL INSERT statements for {} table", table)?;
    writeln!(out, "-- Generated from SQLite database: {}", db_path)?;
    writeln!(out, "-- Generated on: {}", generated_on)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out)
}

/// Run the table export, turning table-level failures into comment lines
///
/// Returns no statements on any failure; statements built before a failing
/// row are never written.
fn export_table_with_diagnostics<W: Write>(
    conn: &Connection,
    table: &str,
    out: &mut W,
) -> std::io::Result<Vec<String>> {
    match export_table(conn, table) {
        Ok(statements) => {
            if statements.is_empty() {
                writeln!(out, "-- Table {} is empty", table)?;
            }
            Ok(statements)
        }
        Err(e @ ExportError::Schema(_)) => {
            tracing::warn!("{}", e);
            writeln!(out, "-- {}", e)?;
            Ok(Vec::new())
        }
        Err(e) => {
            tracing::error!("Error exporting table {}: {}", table, e);
            writeln!(out, "-- Error exporting table {}: {}", table, e)?;
            Ok(Vec::new())
        }
    }
}
