#[cfg(test)]
mod tests {
    use crate::config::DatabaseConfig;
    use crate::error::BackupError;
    use crate::validate::{self, Operation};

    fn test_database(is_local: bool) -> DatabaseConfig {
        DatabaseConfig {
            name: "staging".to_string(),
            database: "app_staging".to_string(),
            host: "db.internal".to_string(),
            port: 5432,
            user: "app".to_string(),
            password: "hunter2".to_string(),
            is_local,
        }
    }

    #[test]
    fn test_filename_with_dump_extension() {
        validate::filename("test.dump").unwrap();
    }

    #[test]
    fn test_filename_with_path() {
        validate::filename("backups/nightly.dump").unwrap();
    }

    #[test]
    fn test_filename_without_extension() {
        let err = validate::filename("test").unwrap_err();
        assert!(matches!(err, BackupError::BadExtension(name) if name == "test"));
    }

    #[test]
    fn test_filename_with_wrong_extension() {
        assert!(validate::filename("test.sql").is_err());
    }

    #[test]
    fn test_filename_with_dump_in_middle() {
        assert!(validate::filename("test.dump.gz").is_err());
    }

    #[test]
    fn test_local_target_passes() {
        validate::target(&test_database(true), Operation::Revive, false).unwrap();
    }

    #[test]
    fn test_remote_target_locked() {
        let err = validate::target(&test_database(false), Operation::Revive, false).unwrap_err();
        assert!(matches!(
            err,
            BackupError::RemoteTargetLocked {
                operation: "revive",
                ..
            }
        ));
    }

    #[test]
    fn test_remote_target_unlocked_with_allow() {
        validate::target(&test_database(false), Operation::Clone, true).unwrap();
    }

    #[test]
    fn test_clone_lock_names_the_operation() {
        let err = validate::target(&test_database(false), Operation::Clone, false).unwrap_err();
        assert!(err.to_string().contains("clone"));
        assert!(err.to_string().contains("--allow"));
    }
}
