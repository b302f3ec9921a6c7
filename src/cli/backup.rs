use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::{cleanup, config::Registry, postgres, progress, validate};

pub fn execute(database: &str, filename: &str, registry: &Registry) -> Result<()> {
    tracing::info!("Backing up database: {}", database);

    validate::filename(filename)?;
    let db = registry.find(database)?;

    // An interrupt mid-dump must not leave a partial file behind.
    cleanup::register(Path::new(filename));

    let spinner = progress::spinner(format!("Backing up '{}' database", db.database))?;
    let result = postgres::dump(db, Path::new(filename));
    spinner.finish_and_clear();
    result?;

    let size = fs::metadata(filename)?.len();
    println!(
        "✓ Database backed up to {} ({:.2} MB)",
        filename,
        size as f64 / 1024.0 / 1024.0
    );

    Ok(())
}
