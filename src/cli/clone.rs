use std::path::Path;

use anyhow::Result;

use crate::{
    cleanup,
    config::Registry,
    postgres, progress,
    validate::{self, Operation},
};

/// Scratch dump written between the two halves of a clone.
pub const TEMP_DUMP_FILE: &str = "temp.dump";

pub fn execute(origin: &str, target: &str, allow: bool, registry: &Registry) -> Result<()> {
    tracing::info!("Cloning database {} into {}", origin, target);

    let origin_db = registry.find(origin)?;
    let target_db = registry.find(target)?;
    validate::target(target_db, Operation::Clone, allow)?;

    postgres::check_ready(origin_db)?;
    postgres::check_ready(target_db)?;

    cleanup::register(Path::new(TEMP_DUMP_FILE));

    let spinner = progress::spinner(format!("Cloning '{}' database", origin_db.database))?;
    let result = (|| -> Result<()> {
        postgres::dump(origin_db, Path::new(TEMP_DUMP_FILE))?;
        postgres::recreate(target_db)?;
        postgres::restore(target_db, Path::new(TEMP_DUMP_FILE))?;
        Ok(())
    })();
    spinner.finish_and_clear();

    if let Err(err) = result {
        // Don't leave the scratch dump behind on a failed clone.
        let _ = cleanup::run();
        return Err(err);
    }

    cleanup::run()?;

    println!("✓ Database cloned into '{}'", target_db.database);

    Ok(())
}
