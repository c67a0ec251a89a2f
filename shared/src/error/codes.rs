//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the presentation layer
/// can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request (malformed JSON, wrong field types)
    InvalidRequest = 5,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee email already exists
    EmployeeEmailExists = 8002,
    /// Role is not one of Manager / Worker / Driver
    InvalidEmployeeRole = 8003,
    /// Manager not found (absent, or the record is not a Manager)
    ManagerNotFound = 8004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeEmailExists => "Employee email already exists",
            ErrorCode::InvalidEmployeeRole => "Role must be one of Manager, Worker, Driver",
            ErrorCode::ManagerNotFound => "Manager not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),
            8003 => Ok(ErrorCode::InvalidEmployeeRole),
            8004 => Ok(ErrorCode::ManagerNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);

        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::EmployeeEmailExists.code(), 8002);
        assert_eq!(ErrorCode::InvalidEmployeeRole.code(), 8003);
        assert_eq!(ErrorCode::ManagerNotFound.code(), 8004);

        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmployeeEmailExists).unwrap();
        assert_eq!(json, "8002");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("8004").unwrap();
        assert_eq!(code, ErrorCode::ManagerNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("4001");
        assert!(result.is_err());
        let result: Result<ErrorCode, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::ValidationFailed), "2");
        assert_eq!(format!("{}", ErrorCode::EmployeeNotFound), "8001");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_try_from_covers_every_code() {
        let codes = [
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidRequest,
            ErrorCode::EmployeeNotFound,
            ErrorCode::EmployeeEmailExists,
            ErrorCode::InvalidEmployeeRole,
            ErrorCode::ManagerNotFound,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }
}
