// ABOUTME: Command implementations for each tool operation
// ABOUTME: Exports migrate, scan, and probe commands

pub mod migrate;
pub mod probe;
pub mod scan;

pub use migrate::migrate;
pub use probe::probe;
pub use scan::scan;
