//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::EmployeeNotFound | Self::ManagerNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::EmployeeEmailExists => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and malformed input)
            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidEmployeeRole => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_statuses() {
        assert_eq!(ErrorCode::EmployeeNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ManagerNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_and_conflict_are_distinct() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidEmployeeRole.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::EmployeeEmailExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_store_fault_is_500() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
    }
}
