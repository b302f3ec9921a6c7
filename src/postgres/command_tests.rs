#[cfg(test)]
mod tests {
    use super::super::command;
    use crate::config::DatabaseConfig;
    use std::path::Path;

    fn test_database() -> DatabaseConfig {
        DatabaseConfig {
            name: "dev".to_string(),
            database: "app_development".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            is_local: true,
        }
    }

    #[test]
    fn test_dump_args() {
        let args = command::dump_args(&test_database());
        assert_eq!(
            args,
            vec![
                "-h",
                "localhost",
                "-p",
                "5432",
                "-U",
                "postgres",
                "-Fc",
                "-d",
                "app_development",
            ]
        );
    }

    #[test]
    fn test_restore_args() {
        let args = command::restore_args(&test_database(), Path::new("nightly.dump"));

        assert!(args.contains(&"--no-owner".to_string()));
        assert!(args.contains(&"--no-privileges".to_string()));
        assert_eq!(args.last().unwrap(), "nightly.dump");
    }

    #[test]
    fn test_dropdb_args() {
        let args = command::dropdb_args(&test_database());
        assert_eq!(
            args,
            vec![
                "-h",
                "localhost",
                "-p",
                "5432",
                "-U",
                "postgres",
                "--if-exists",
                "app_development",
            ]
        );
    }

    #[test]
    fn test_createdb_args() {
        let args = command::createdb_args(&test_database());
        assert_eq!(args.last().unwrap(), "app_development");
        assert!(!args.contains(&"--if-exists".to_string()));
    }

    #[test]
    fn test_isready_args() {
        let args = command::isready_args(&test_database());
        assert_eq!(
            args,
            vec![
                "-h",
                "localhost",
                "-p",
                "5432",
                "-U",
                "postgres",
                "-d",
                "app_development",
            ]
        );
    }
}
