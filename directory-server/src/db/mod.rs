//! Database Module
//!
//! Opens the embedded SurrealDB instance and applies the employee schema.

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Employee table schema, applied on every start
const SCHEMA: &str = include_str!("schema.surql");

/// Database service: owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database described by `config` (RocksDB on disk, or memory)
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = if config.uses_memory_database() {
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?
        } else {
            if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!("Failed to create database directory: {e}"))
                })?;
            }
            Surreal::new::<RocksDb>(config.database_path.as_str())
                .await
                .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?
        };

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.db_namespace,
            database = %config.db_database,
            "Database connection established"
        );

        Self::apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }

    async fn apply_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        Ok(())
    }
}
