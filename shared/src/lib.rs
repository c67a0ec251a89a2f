//! Shared types for the employee directory
//!
//! Wire types used by the directory server and by anything that talks to it:
//! employee payloads, the unified error system, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    EmployeeCreate, EmployeeResponse, EmployeeRole, EmployeeUpdate, ManagerWithReports,
};
