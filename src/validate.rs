//! Safety gate applied before touching a database or the filesystem.

use crate::config::DatabaseConfig;
use crate::error::BackupError;

pub const DUMP_EXTENSION: &str = ".dump";

/// The destructive operations guarded by the local-target lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Revive,
    Clone,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Revive => "revive",
            Operation::Clone => "clone",
        }
    }
}

/// Backup files must carry the .dump extension.
pub fn filename(filename: &str) -> Result<(), BackupError> {
    if filename.ends_with(DUMP_EXTENSION) {
        Ok(())
    } else {
        Err(BackupError::BadExtension(filename.to_string()))
    }
}

/// A non-local target is only writable when the caller passed --allow.
pub fn target(
    db: &DatabaseConfig,
    operation: Operation,
    allow: bool,
) -> Result<(), BackupError> {
    if allow || db.is_local {
        return Ok(());
    }
    Err(BackupError::RemoteTargetLocked {
        database: db.name.clone(),
        operation: operation.as_str(),
    })
}
