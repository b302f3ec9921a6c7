//! Orchestration of the PostgreSQL client tools.

pub mod command;
#[cfg(test)]
mod command_tests;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use which::which;

use crate::cleanup;
use crate::config::DatabaseConfig;
use crate::error::BackupError;

pub const PG_DUMP: &str = "pg_dump";
pub const PG_RESTORE: &str = "pg_restore";
pub const DROPDB: &str = "dropdb";
pub const CREATEDB: &str = "createdb";
pub const PG_ISREADY: &str = "pg_isready";

/// Dump `db` into `file` using pg_dump's custom format.
pub fn dump(db: &DatabaseConfig, file: &Path) -> Result<(), BackupError> {
    let out = File::create(file)?;
    run(PG_DUMP, &command::dump_args(db), db, Stdio::from(out))
}

/// Restore `file` into `db` with pg_restore.
pub fn restore(db: &DatabaseConfig, file: &Path) -> Result<(), BackupError> {
    run(PG_RESTORE, &command::restore_args(db, file), db, Stdio::null())
}

/// Drop and recreate the target database so the restore starts from a
/// clean slate.
pub fn recreate(db: &DatabaseConfig) -> Result<(), BackupError> {
    run(DROPDB, &command::dropdb_args(db), db, Stdio::null())?;
    run(CREATEDB, &command::createdb_args(db), db, Stdio::null())
}

/// Probe the server with pg_isready.
pub fn check_ready(db: &DatabaseConfig) -> Result<(), BackupError> {
    run(PG_ISREADY, &command::isready_args(db), db, Stdio::null())
        .map_err(|err| match err {
            BackupError::ToolMissing(_) => err,
            _ => BackupError::Unreachable(db.name.clone()),
        })
}

fn locate(tool: &'static str) -> Result<PathBuf, BackupError> {
    which(tool).map_err(|_| BackupError::ToolMissing(tool))
}

/// Run one client tool to completion, surfacing its stderr on failure.
/// The password travels on the child's environment only.
fn run(
    tool: &'static str,
    args: &[String],
    db: &DatabaseConfig,
    stdout: Stdio,
) -> Result<(), BackupError> {
    let bin = locate(tool)?;
    tracing::debug!("running {} {}", tool, args.join(" "));

    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env("PGPASSWORD", &db.password)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::piped());
    cleanup::unblock_in_child(&mut cmd);

    let child = cmd.spawn()?;
    let output = child.wait_with_output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::debug!("{} exited with {}", tool, output.status);
        return Err(BackupError::ToolFailed { tool, stderr });
    }

    Ok(())
}
