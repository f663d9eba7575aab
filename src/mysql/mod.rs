// ABOUTME: MySQL destination store access
// ABOUTME: Exports connection handling, server probing, and the transactional writer

pub mod connection;
pub mod probe;
pub mod writer;

pub use connection::{connect, connect_with_retry, validate_server_url};
pub use probe::{is_system_schema, list_columns, list_databases, row_count, table_exists};
pub use writer::insert_records;
