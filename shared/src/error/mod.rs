//! Unified error system for the employee directory
//!
//! This module provides the error handling shared by the server and its clients:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Uniform failure body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::EmployeeNotFound, "Employee abc not found");
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::validation("firstName must not be empty")
//!     .with_detail("field", "firstName");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 2);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
