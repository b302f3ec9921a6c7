use anyhow::Result;
use clap::{Parser, Subcommand};
use pgback::{cleanup, config::Registry};
use std::path::PathBuf;
use tracing_subscriber;

#[derive(Parser)]
#[command(name = "pgback")]
#[command(about = "Backup utilities for PostgreSQL databases", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry file override (defaults to ./databases.json, then ~/databases.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a backup of a database, also known as a dump
    Backup {
        /// Name of the database entry in databases.json
        database: String,

        /// Destination file, must end in .dump
        filename: String,
    },

    /// Revive a database from a backup, also known as a restore
    Revive {
        /// Allow writing to a non-local database
        #[arg(long)]
        allow: bool,

        /// Backup file to restore from
        filename: String,

        /// Name of the target database entry in databases.json
        database: String,
    },

    /// Clone a database into another database
    Clone {
        /// Allow writing to a non-local database
        #[arg(long)]
        allow: bool,

        /// Name of the database to copy from
        origin: String,

        /// Name of the database to copy into
        target: String,
    },

    /// Check that a database accepts connections
    Check {
        /// Name of the database entry in databases.json
        database: String,
    },

    /// List the configured databases
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    // An interrupt anywhere past this point deletes the in-progress dump.
    cleanup::spawn_signal_listener()?;

    let registry = Registry::load(cli.config.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Backup { database, filename } => {
            pgback::cli::backup::execute(&database, &filename, &registry)?;
        }
        Commands::Revive {
            allow,
            filename,
            database,
        } => {
            pgback::cli::revive::execute(&filename, &database, allow, &registry)?;
        }
        Commands::Clone {
            allow,
            origin,
            target,
        } => {
            pgback::cli::clone::execute(&origin, &target, allow, &registry)?;
        }
        Commands::Check { database } => {
            pgback::cli::check::execute(&database, &registry)?;
        }
        Commands::List => {
            pgback::cli::list::execute(&registry)?;
        }
    }

    Ok(())
}
