use std::path::PathBuf;

/// `DATABASE_PATH` value selecting the in-memory engine
pub const MEMORY_DATABASE: &str = "memory";

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first when present):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | data and logs root |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | DATABASE_PATH | $WORK_DIR/directory.db | RocksDB path, or `memory` |
/// | DB_NAMESPACE | directory | SurrealDB namespace |
/// | DB_DATABASE | assignment | SurrealDB database |
/// | ENVIRONMENT | development | development / staging / production / test |
/// | LOG_LEVEL | info | default log filter (RUST_LOG wins) |
/// | LOG_DIR | $WORK_DIR/logs | rolling log file directory |
/// | APP_URL | http://localhost:3002 | browser origin allowed by CORS, `*` for any |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/directory HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// RocksDB directory, or [`MEMORY_DATABASE`]
    pub database_path: String,
    pub db_namespace: String,
    pub db_database: String,
    /// Runtime environment: development | staging | production | test
    pub environment: String,
    /// Default log filter directive
    pub log_level: String,
    /// Log file directory; `None` logs to stdout only
    pub log_dir: Option<String>,
    /// Origin of the presentation layer
    pub app_url: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let default_db = PathBuf::from(&work_dir)
            .join("directory.db")
            .to_string_lossy()
            .into_owned();
        let default_logs = PathBuf::from(&work_dir)
            .join("logs")
            .to_string_lossy()
            .into_owned();

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or(default_db),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "directory".into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| "assignment".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: Some(std::env::var("LOG_DIR").unwrap_or(default_logs)),
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:3002".into()),
            work_dir,
        }
    }

    /// In-memory configuration for tests
    ///
    /// Does not read the environment, so parallel tests stay isolated.
    pub fn for_tests() -> Self {
        Self {
            work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            http_port: 0,
            database_path: MEMORY_DATABASE.into(),
            db_namespace: "directory".into(),
            db_database: "test".into(),
            environment: "test".into(),
            log_level: "warn".into(),
            log_dir: None,
            app_url: "*".into(),
        }
    }

    pub fn uses_memory_database(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tests_uses_memory_and_no_log_file() {
        let config = Config::for_tests();
        assert!(config.uses_memory_database());
        assert!(config.log_dir.is_none());
        assert!(!config.is_production());
        assert_eq!(config.app_url, "*");
    }
}
