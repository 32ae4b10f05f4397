// ABOUTME: CLI entry point for sqlite-pg-export
// ABOUTME: Parses arguments, sets up logging on stderr, and writes SQL to stdout

use clap::Parser;
use sqlite_pg_export::commands;
use sqlite_pg_export::config::{ExportConfig, DEFAULT_DB_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sqlite-pg-export")]
#[command(
    about = "Export the TIPI_UTENTE table from SQLite as PostgreSQL INSERT statements",
    long_about = None
)]
struct Cli {
    /// Path to SQLite database file
    #[arg(long, default_value = DEFAULT_DB_PATH)]
    db_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set.
    // Logs go to stderr; stdout carries only SQL.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ExportConfig::new(cli.db_path);

    let stdout = std::io::stdout();
    let summary = commands::export(&config, &mut stdout.lock())?;

    tracing::info!(
        "Exported {} rows from {}",
        summary.statements,
        summary.table
    );

    Ok(())
}
