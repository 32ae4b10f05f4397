// ABOUTME: Library module for sqlite-pg-export
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod sqlite;
