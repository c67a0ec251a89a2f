//! Repository Module
//!
//! CRUD operations against the embedded SurrealDB tables.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    InvalidRole(String),

    /// Optimistic transaction lost against a concurrent writer
    #[error("Write conflict: {0}")]
    WriteConflict(String),
}

impl RepoError {
    /// Lower sorts first when a failed transaction reports several errors
    fn precedence(&self) -> u8 {
        match self {
            RepoError::Duplicate(_) => 0,
            RepoError::Validation(_) | RepoError::InvalidRole(_) => 1,
            RepoError::WriteConflict(_) => 2,
            RepoError::Database(_) => 3,
        }
    }
}

impl From<surrealdb::Error> for RepoError {
    /// Schema-level rejections keep their meaning; everything else is a store fault
    fn from(err: surrealdb::Error) -> Self {
        let message = err.to_string();
        if message.contains("already contains") {
            RepoError::Duplicate(message)
        } else if message.contains("read or write conflict") || message.contains("can be retried")
        {
            RepoError::WriteConflict(message)
        } else if message.contains("must conform to") || message.contains("coerce") {
            RepoError::Validation(message)
        } else {
            RepoError::Database(message)
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Database(format!("Malformed row: {err}"))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::EmployeeEmailExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InvalidRole(msg) => {
                AppError::with_message(ErrorCode::InvalidEmployeeRole, msg)
            }
            RepoError::Database(msg) | RepoError::WriteConflict(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// Records live at `employee:<key>` where the key is generated on insert.
// Only the key leaves the repository:
//   - address a record: type::thing("employee", $id)
//   - project it back:  record::id(id) AS id
// Any string is a syntactically valid key, so a malformed id is "absent".

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Fail when any statement of `response` failed
///
/// Inside a cancelled transaction every statement reports an error; the one
/// that caused the rollback is returned.
pub(crate) fn check_statements(mut response: surrealdb::Response) -> RepoResult<surrealdb::Response> {
    let errors = response.take_errors();
    match errors
        .into_values()
        .map(RepoError::from)
        .min_by_key(RepoError::precedence)
    {
        Some(err) => Err(err),
        None => Ok(response),
    }
}

/// Take statement `index` and decode its rows through JSON
pub(crate) fn take_rows<T: DeserializeOwned>(
    response: &mut surrealdb::Response,
    index: usize,
) -> RepoResult<Vec<T>> {
    let rows: Vec<serde_json::Value> = response.take(index)?;
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(RepoError::from))
        .collect()
}
