use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::services::DirectoryService;
use crate::utils::AppResult;

/// Server state - cheap to clone, handed to every handler
///
/// Holds no records: every request goes to the store.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | directory | DirectoryService | employee operations |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub directory: DirectoryService,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let directory = DirectoryService::new(EmployeeRepository::new(db));
        Self { config, directory }
    }

    /// Open the database, apply the schema and build the state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_service = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    pub fn directory(&self) -> &DirectoryService {
        &self.directory
    }
}
