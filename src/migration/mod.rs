// ABOUTME: The row migration routine - read all, write all, commit once
// ABOUTME: Moves every medicament record from the SQLite source to the MySQL destination

use std::path::Path;

use anyhow::{Context, Result};

use crate::{mysql, sqlite};

/// Outcome of a completed migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    /// Rows retrieved from the source table.
    pub records_found: usize,
    /// Rows written to the destination table. Equal to `records_found` on
    /// success; the function does not return a partial count.
    pub records_written: usize,
}

/// Migrate all medication records from a SQLite file to a MySQL table.
///
/// Reads the full source result set into memory, inserts each row into the
/// destination with positional binding, and commits once after the last
/// insert. An empty source table results in zero inserts and a successful
/// commit. `on_read` receives the source row count before any insert is
/// issued; `on_row` fires after each insert.
///
/// Both connections are released on every path: the SQLite handle when it
/// drops, the MySQL connection via explicit disconnect on success or drop
/// on error. A failure before commit leaves no new rows behind because the
/// open transaction rolls back.
pub async fn migrate<R, F>(
    sqlite_path: &Path,
    mysql_url: &str,
    table: &str,
    on_read: R,
    on_row: F,
) -> Result<MigrationReport>
where
    R: FnOnce(usize),
    F: FnMut(),
{
    let source = sqlite::open(sqlite_path)?;
    let records = sqlite::fetch_all_records(&source, table)?;
    drop(source);

    on_read(records.len());

    let mut dest = mysql::connect_with_retry(mysql_url)
        .await
        .context("Failed to connect to destination database")?;

    let records_written = mysql::insert_records(&mut dest, table, &records, on_row).await?;

    dest.disconnect()
        .await
        .context("Failed to close destination connection")?;

    Ok(MigrationReport {
        records_found: records.len(),
        records_written,
    })
}
