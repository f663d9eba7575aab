// ABOUTME: Probe command implementation - Row counts for a known database list
// ABOUTME: Reports the medicaments row count per database, continuing past failures

use anyhow::{Context, Result};

use crate::mysql;
use crate::utils::sanitize_identifier;

/// Report the medicaments row count for each database in an explicit list
///
/// Unlike scan, this does not enumerate the server; it checks exactly the
/// databases it was given. A per-database failure (missing database, missing
/// table, permissions) is printed and probing continues, so the command
/// exits cleanly even when every probe fails.
pub async fn probe(server_url: &str, databases: &[String], table: &str) -> Result<()> {
    mysql::validate_server_url(server_url)?;

    let mut conn = mysql::connect_with_retry(server_url)
        .await
        .context("Failed to connect to MySQL server")?;

    for database in databases {
        let display_name = sanitize_identifier(database);

        match mysql::row_count(&mut conn, database, table).await {
            Ok(count) => {
                tracing::info!("DB: {} | Count: {}", display_name, count);
            }
            Err(e) => {
                tracing::warn!("DB: {} | Error: {:#}", display_name, e);
            }
        }
    }

    conn.disconnect()
        .await
        .context("Failed to close server connection")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_rejects_bad_server_url() {
        let databases = vec!["test".to_string()];
        let result = probe("", &databases, "medicaments").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore]
    async fn test_probe_command_tolerates_missing_databases() {
        // This test requires a running MySQL server; the probed databases
        // do not need to exist
        let url = std::env::var("TEST_MYSQL_SERVER_URL").unwrap();
        let databases = vec![
            "bacheliers".to_string(),
            "facture".to_string(),
            "test".to_string(),
        ];

        let result = probe(&url, &databases, "medicaments").await;
        assert!(result.is_ok(), "Probe command failed: {:?}", result);
    }
}
