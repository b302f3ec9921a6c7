use anyhow::Result;

use crate::{config::Registry, postgres};

pub fn execute(database: &str, registry: &Registry) -> Result<()> {
    tracing::info!("Checking connectivity for database: {}", database);

    let db = registry.find(database)?;
    postgres::check_ready(db)?;

    println!(
        "✓ '{}' is accepting connections ({}:{})",
        db.name, db.host, db.port
    );

    Ok(())
}
