//! Argument construction for each PostgreSQL client tool.

use std::path::Path;

use crate::config::DatabaseConfig;

/// Connection flags shared by every client tool.
fn connection_args(db: &DatabaseConfig) -> Vec<String> {
    vec![
        "-h".to_string(),
        db.host.clone(),
        "-p".to_string(),
        db.port.to_string(),
        "-U".to_string(),
        db.user.clone(),
    ]
}

/// pg_dump in custom format, archive written to stdout.
pub fn dump_args(db: &DatabaseConfig) -> Vec<String> {
    let mut args = connection_args(db);
    args.push("-Fc".to_string());
    args.push("-d".to_string());
    args.push(db.database.clone());
    args
}

/// pg_restore without ownership or privilege statements, so the dump
/// replays cleanly under the target's credentials.
pub fn restore_args(db: &DatabaseConfig, file: &Path) -> Vec<String> {
    let mut args = connection_args(db);
    args.push("--no-owner".to_string());
    args.push("--no-privileges".to_string());
    args.push("-d".to_string());
    args.push(db.database.clone());
    args.push(file.display().to_string());
    args
}

pub fn dropdb_args(db: &DatabaseConfig) -> Vec<String> {
    let mut args = connection_args(db);
    args.push("--if-exists".to_string());
    args.push(db.database.clone());
    args
}

pub fn createdb_args(db: &DatabaseConfig) -> Vec<String> {
    let mut args = connection_args(db);
    args.push(db.database.clone());
    args
}

pub fn isready_args(db: &DatabaseConfig) -> Vec<String> {
    let mut args = connection_args(db);
    args.push("-d".to_string());
    args.push(db.database.clone());
    args
}
