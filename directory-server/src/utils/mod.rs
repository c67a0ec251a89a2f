//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - application error types (from `shared::error`)
//! - logging setup and input validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
