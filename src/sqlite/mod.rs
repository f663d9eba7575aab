// ABOUTME: SQLite source store access for the medicaments table
// ABOUTME: Opens the database file read-only and fetches the full result set into memory

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};

use crate::record::{self, MedicationRecord};

/// Open the source SQLite database file read-only.
///
/// The migration never mutates the source store, so the handle is opened
/// without write access.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open SQLite database at '{}'", path.display()))?;

    Ok(conn)
}

/// Read all medication records from the source table.
///
/// The full result set is held in memory; the medicaments table is small
/// enough that streaming is not worth the complexity. Rows come back in
/// the source result-set order, which the insert phase preserves.
pub fn fetch_all_records(conn: &Connection, table: &str) -> Result<Vec<MedicationRecord>> {
    let sql = record::select_sql(table);

    let mut stmt = conn
        .prepare(&sql)
        .with_context(|| format!("Failed to read from source table '{}'", table))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MedicationRecord {
                name: row.get(0)?,
                price: row.get(1)?,
                dosage: row.get(2)?,
                composition: row.get(3)?,
                therapeutic_class: row.get(4)?,
                atc_code: row.get(5)?,
            })
        })
        .with_context(|| format!("Failed to query source table '{}'", table))?;

    let mut records = Vec::new();
    for row in rows {
        let record =
            row.with_context(|| format!("Failed to read row from source table '{}'", table))?;
        records.push(record);
    }

    tracing::debug!("Read {} records from source table '{}'", records.len(), table);

    Ok(records)
}
