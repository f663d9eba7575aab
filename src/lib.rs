// ABOUTME: Library module for mediassist-migrator
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod commands;
pub mod migration;
pub mod mysql;
pub mod record;
pub mod sqlite;
pub mod utils;
