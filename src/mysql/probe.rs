// ABOUTME: MySQL server inspection helpers
// ABOUTME: Lists user databases and checks table presence, row counts, and columns

use anyhow::{Context, Result};
use mysql_async::prelude::*;
use mysql_async::Conn;

use crate::record::quote_mysql_ident;

/// Schemas that ship with the server (or phpMyAdmin) and never hold
/// application data.
const SYSTEM_SCHEMAS: [&str; 5] = [
    "information_schema",
    "performance_schema",
    "mysql",
    "sys",
    "phpmyadmin",
];

/// Whether a database name is one of the built-in system schemas.
pub fn is_system_schema(name: &str) -> bool {
    SYSTEM_SCHEMAS.iter().any(|s| s.eq_ignore_ascii_case(name))
}

/// List all user databases on the server, excluding system schemas.
pub async fn list_databases(conn: &mut Conn) -> Result<Vec<String>> {
    let names: Vec<String> = conn
        .query("SHOW DATABASES")
        .await
        .context("Failed to list databases on server")?;

    let user_databases: Vec<String> = names
        .into_iter()
        .filter(|name| !is_system_schema(name))
        .collect();

    tracing::debug!("Found {} user databases", user_databases.len());

    Ok(user_databases)
}

/// Check whether a table exists in the given database.
pub async fn table_exists(conn: &mut Conn, database: &str, table: &str) -> Result<bool> {
    let sql = r"
        SELECT COUNT(*) FROM information_schema.TABLES
        WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
    ";

    let count: Option<i64> = conn
        .exec_first(sql, (database, table))
        .await
        .with_context(|| format!("Failed to check for table '{}' in '{}'", table, database))?;

    Ok(count.unwrap_or(0) > 0)
}

/// Count the rows of a table, addressed with a fully qualified name.
pub async fn row_count(conn: &mut Conn, database: &str, table: &str) -> Result<i64> {
    let sql = format!(
        "SELECT COUNT(*) FROM {}.{}",
        quote_mysql_ident(database),
        quote_mysql_ident(table)
    );

    let count: Option<i64> = conn
        .query_first(sql)
        .await
        .with_context(|| format!("Failed to count rows in '{}.{}'", database, table))?;

    Ok(count.unwrap_or(0))
}

/// List the column names of a table in ordinal order.
///
/// CAST to CHAR avoids collation surprises where information_schema returns
/// VARBINARY instead of VARCHAR.
pub async fn list_columns(conn: &mut Conn, database: &str, table: &str) -> Result<Vec<String>> {
    let sql = r"
        SELECT CAST(COLUMN_NAME AS CHAR(255))
        FROM information_schema.COLUMNS
        WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
        ORDER BY ORDINAL_POSITION
    ";

    let columns: Vec<String> = conn
        .exec(sql, (database, table))
        .await
        .with_context(|| format!("Failed to list columns of '{}.{}'", database, table))?;

    Ok(columns)
}
