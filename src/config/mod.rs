
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BackupError;

/// File name looked up in the current directory, then the home directory.
pub const REGISTRY_FILE: &str = "databases.json";

/// Connection credentials for one named logical database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub name: String,
    pub database: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,

    /// Databases on the local machine may be overwritten without --allow.
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    databases: Vec<DatabaseConfig>,
}

/// All known databases for this invocation.
#[derive(Debug)]
pub struct Registry {
    databases: Vec<DatabaseConfig>,
}

impl Registry {
    /// Load the registry from `override_path` if given, otherwise from
    /// ./databases.json, falling back to ~/databases.json.
    pub fn load(override_path: Option<&Path>) -> Result<Self, BackupError> {
        let path = match override_path {
            Some(path) => path.to_path_buf(),
            None => default_path().ok_or(BackupError::RegistryNotFound)?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, BackupError> {
        tracing::debug!("loading registry from {}", path.display());
        let raw = fs::read_to_string(path)?;
        let parsed: RegistryFile = serde_json::from_str(&raw)?;
        Ok(Self {
            databases: parsed.databases,
        })
    }

    /// Look up a database by its registry name.
    pub fn find(&self, name: &str) -> Result<&DatabaseConfig, BackupError> {
        self.databases
            .iter()
            .find(|db| db.name == name)
            .ok_or_else(|| BackupError::UnknownDatabase(name.to_string()))
    }

    pub fn databases(&self) -> &[DatabaseConfig] {
        &self.databases
    }
}

fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(REGISTRY_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::home_dir()
        .map(|home| home.join(REGISTRY_FILE))
        .filter(|path| path.exists())
}
