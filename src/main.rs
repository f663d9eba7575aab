// ABOUTME: CLI entry point for mediassist-migrator
// ABOUTME: Parses commands and routes to appropriate handlers

use clap::{Parser, Subcommand};
use mediassist_migrator::commands;
use mediassist_migrator::record;

#[derive(Parser)]
#[command(name = "mediassist-migrator")]
#[command(about = "Migrate the MediAssist medicaments table from SQLite to MySQL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy all medicament rows from a SQLite file into a MySQL table
    Migrate {
        /// Path to the source SQLite database file
        #[arg(long, default_value = "mediassist/medicaments.db")]
        source: String,
        /// MySQL connection URL for the destination database
        #[arg(long, default_value = "mysql://root@127.0.0.1:3306/mediassist")]
        target: String,
        /// Table to read from and insert into
        #[arg(long, default_value = record::DEFAULT_TABLE)]
        table: String,
    },
    /// Scan every database on a MySQL server for the medicaments table
    Scan {
        /// MySQL server connection URL (database part optional)
        #[arg(long, default_value = "mysql://root@127.0.0.1:3306")]
        server: String,
        /// Table to look for
        #[arg(long, default_value = record::DEFAULT_TABLE)]
        table: String,
    },
    /// Report medicaments row counts for an explicit list of databases
    Probe {
        /// MySQL server connection URL (database part optional)
        #[arg(long, default_value = "mysql://root@127.0.0.1:3306")]
        server: String,
        /// Databases to probe (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "bacheliers,facture,test"
        )]
        databases: Vec<String>,
        /// Table to count rows in
        #[arg(long, default_value = record::DEFAULT_TABLE)]
        table: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate {
            source,
            target,
            table,
        } => commands::migrate(&source, &target, &table).await,
        Commands::Scan { server, table } => commands::scan(&server, &table).await,
        Commands::Probe {
            server,
            databases,
            table,
        } => commands::probe(&server, &databases, &table).await,
    }
}
