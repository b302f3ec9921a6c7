use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("there's an issue with the databases.json file: {0}")]
    MalformedRegistry(#[from] serde_json::Error),

    #[error("databases.json file is not present in the current or home directory")]
    RegistryNotFound,

    #[error("no credentials for '{0}' database")]
    UnknownDatabase(String),

    #[error("the file must carry the '.dump' extension, i.e. 'my_file.dump', got '{0}'")]
    BadExtension(String),

    #[error("target database '{database}' is not local. This is a security lock; rerun {operation} with '--allow' to remove it")]
    RemoteTargetLocked {
        database: String,
        operation: &'static str,
    },

    #[error("{0} is not installed or not on PATH")]
    ToolMissing(&'static str),

    #[error("{tool} failed: {stderr}")]
    ToolFailed {
        tool: &'static str,
        stderr: String,
    },

    #[error("cannot make a connection with '{0}' database")]
    Unreachable(String),

    #[error("no dump file registered for cleanup")]
    NothingToCleanUp,
}
