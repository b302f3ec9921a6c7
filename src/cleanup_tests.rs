#[cfg(test)]
mod tests {
    use crate::cleanup;
    use crate::error::BackupError;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // The registration lives in the process environment, so these tests
    // must not run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_run_removes_registered_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.dump");
        fs::write(&path, b"pgdump archive").unwrap();

        cleanup::register(&path);
        cleanup::run().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_run_without_registration() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(cleanup::CLEANUP_FILE_ENV);

        let err = cleanup::run().unwrap_err();
        assert!(matches!(err, BackupError::NothingToCleanUp));
    }

    #[test]
    fn test_run_with_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();

        cleanup::register(&temp.path().join("never-written.dump"));
        let err = cleanup::run().unwrap_err();
        assert!(matches!(err, BackupError::Io(_)));

        std::env::remove_var(cleanup::CLEANUP_FILE_ENV);
    }

    #[test]
    fn test_registration_is_consumed_by_run() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.dump");
        fs::write(&path, b"pgdump archive").unwrap();

        cleanup::register(&path);
        cleanup::run().unwrap();

        // A second run has nothing left to remove.
        assert!(matches!(
            cleanup::run().unwrap_err(),
            BackupError::NothingToCleanUp
        ));
    }
}
