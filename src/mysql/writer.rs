// ABOUTME: Transactional writer for the MySQL destination table
// ABOUTME: Inserts all records with positional binding and commits once at the end

use anyhow::{Context, Result};
use mysql_async::prelude::*;
use mysql_async::{Conn, TxOpts};

use crate::record::{self, MedicationRecord};

/// Insert all records into the destination table inside one transaction.
///
/// Every row is written with a parameterized INSERT using positional
/// binding, then the transaction is committed once after the last row.
/// If any insert fails the error propagates and the transaction is rolled
/// back when dropped, so the destination gains either all rows or none.
///
/// `on_row` is invoked after each successful insert so callers can drive
/// progress reporting.
pub async fn insert_records<F>(
    conn: &mut Conn,
    table: &str,
    records: &[MedicationRecord],
    mut on_row: F,
) -> Result<usize>
where
    F: FnMut(),
{
    let mut tx = conn
        .start_transaction(TxOpts::default())
        .await
        .context("Failed to start destination transaction")?;

    let sql = record::insert_sql(table);

    for record in records {
        tx.exec_drop(sql.as_str(), record.to_params())
            .await
            .with_context(|| format!("Failed to insert record into table '{}'", table))?;
        on_row();
    }

    tx.commit()
        .await
        .context("Failed to commit destination transaction")?;

    tracing::debug!("Wrote {} records to table '{}'", records.len(), table);

    Ok(records.len())
}
