// ABOUTME: Scan command implementation - Find medicaments tables across a server
// ABOUTME: Enumerates user databases and reports table presence, row counts, and columns

use anyhow::{Context, Result};
use mysql_async::Conn;

use crate::mysql;
use crate::utils::sanitize_identifier;

/// What the scan found in one database.
struct TableFinding {
    row_count: i64,
    columns: Vec<String>,
}

/// Scan every user database on a MySQL server for the medicaments table
///
/// This command:
/// 1. Lists all databases on the server, skipping system schemas
/// 2. Checks each database for the target table
/// 3. Reports row count and column list for every match, so the operator
///    can verify the schema against the source
///
/// A failure while checking one database is logged and scanning continues
/// with the next one.
pub async fn scan(server_url: &str, table: &str) -> Result<()> {
    mysql::validate_server_url(server_url)?;

    tracing::info!("--- Scanning all databases for '{}' table ---", table);

    let mut conn = mysql::connect_with_retry(server_url)
        .await
        .context("Failed to connect to MySQL server")?;

    let databases = mysql::list_databases(&mut conn).await?;
    tracing::info!("Checking {} user databases...", databases.len());
    tracing::info!("");

    let mut found = 0;
    let mut errors = 0;

    for database in &databases {
        let display_name = sanitize_identifier(database);

        match scan_database(&mut conn, database, table).await {
            Ok(Some(finding)) => {
                found += 1;
                tracing::info!(
                    "FOUND: Database '{}' has '{}' table with {} rows.",
                    display_name,
                    table,
                    finding.row_count
                );
                tracing::info!("  Columns: {:?}", finding.columns);
            }
            Ok(None) => {
                tracing::debug!("Database '{}' has no '{}' table", display_name, table);
            }
            Err(e) => {
                errors += 1;
                tracing::warn!("Error checking {}: {:#}", display_name, e);
            }
        }
    }

    tracing::info!("");
    tracing::info!("========================================");
    tracing::info!("Scan Summary");
    tracing::info!("========================================");
    tracing::info!("Databases checked: {}", databases.len());
    tracing::info!("✓ Tables found: {}", found);
    if errors > 0 {
        tracing::warn!("⚠ Databases with errors: {}", errors);
    }
    tracing::info!("========================================");

    conn.disconnect()
        .await
        .context("Failed to close server connection")?;

    Ok(())
}

async fn scan_database(
    conn: &mut Conn,
    database: &str,
    table: &str,
) -> Result<Option<TableFinding>> {
    if !mysql::table_exists(conn, database, table).await? {
        return Ok(None);
    }

    let row_count = mysql::row_count(conn, database, table).await?;
    let columns = mysql::list_columns(conn, database, table).await?;

    Ok(Some(TableFinding { row_count, columns }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_rejects_bad_server_url() {
        let result = scan("http://not-mysql", "medicaments").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn test_scan_command() {
        // This test requires a running MySQL server
        let url = std::env::var("TEST_MYSQL_SERVER_URL").unwrap();

        let result = scan(&url, "medicaments").await;

        match &result {
            Ok(_) => println!("✓ Scan command completed successfully"),
            Err(e) => println!("Scan command failed: {:?}", e),
        }

        assert!(result.is_ok(), "Scan command failed: {:?}", result);
    }
}
