// ABOUTME: Command implementations for the export CLI
// ABOUTME: Exports the export command and its run summary

pub mod export;

pub use export::{export, ExportSummary};
