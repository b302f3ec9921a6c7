use anyhow::Result;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};

use crate::config::Registry;

pub fn execute(registry: &Registry) -> Result<()> {
    let databases = registry.databases();

    if databases.is_empty() {
        println!("No databases configured.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["NAME", "DATABASE", "SERVER", "LOCAL"]);

    for db in databases {
        table.add_row(vec![
            db.name.clone(),
            db.database.clone(),
            format!("{}:{}", db.host, db.port),
            if db.is_local { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
