// ABOUTME: Migrate command implementation - SQLite to MySQL bulk copy
// ABOUTME: Reads every medicament row from the source file and inserts them into MySQL

use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::migration;
use crate::mysql;

/// Copy all medication records from the SQLite source into the MySQL table
///
/// This command:
/// 1. Reads the full source result set into memory
/// 2. Inserts each row into the destination with positional binding
/// 3. Commits once after all inserts and reports the transferred count
///
/// A failure during read, insert, or commit propagates and rolls back the
/// destination transaction; the source store is never mutated.
pub async fn migrate(sqlite_path: &str, mysql_url: &str, table: &str) -> Result<()> {
    mysql::validate_server_url(mysql_url)?;

    tracing::info!("Starting medicaments migration...");
    tracing::info!("Source: {}", sqlite_path);
    tracing::info!("Table: '{}'", table);
    tracing::info!("");

    // Length is set once the source row count is known
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let report = migration::migrate(
        Path::new(sqlite_path),
        mysql_url,
        table,
        |total| {
            tracing::info!("Found {} records to migrate", total);
            progress.set_length(total as u64);
        },
        || progress.inc(1),
    )
    .await?;

    progress.finish_with_message("Migration complete");

    tracing::info!("");
    tracing::info!("========================================");
    tracing::info!("Migration Summary");
    tracing::info!("========================================");
    tracing::info!("Records found:   {}", report.records_found);
    tracing::info!("Records written: {}", report.records_written);
    tracing::info!("========================================");
    tracing::info!("");
    tracing::info!("✓ Data migrated successfully!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_rejects_bad_target_url() {
        let result = migrate("medicaments.db", "not-a-mysql-url", "medicaments").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_migrate_missing_source_file_fails() {
        // URL validation passes; the missing source file is the first failure
        let result = migrate(
            "/nonexistent/medicaments.db",
            "mysql://root@127.0.0.1:3306/mediassist",
            "medicaments",
        )
        .await;
        assert!(result.is_err());
    }
}
