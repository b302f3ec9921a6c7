use std::path::Path;

use anyhow::Result;

use crate::{
    config::Registry,
    postgres, progress,
    validate::{self, Operation},
};

pub fn execute(filename: &str, database: &str, allow: bool, registry: &Registry) -> Result<()> {
    tracing::info!("Reviving database: {}", database);

    validate::filename(filename)?;
    let db = registry.find(database)?;
    validate::target(db, Operation::Revive, allow)?;

    if !Path::new(filename).exists() {
        anyhow::bail!("backup file not found: {}", filename);
    }

    postgres::check_ready(db)?;

    println!("Preparing '{}' database...", db.database);
    postgres::recreate(db)?;

    let spinner = progress::spinner(format!("Reviving {}", filename))?;
    let result = postgres::restore(db, Path::new(filename));
    spinner.finish_and_clear();
    result?;

    println!("✓ Database revived in '{}'", db.database);

    Ok(())
}
