//! Input validation helpers
//!
//! Centralized text length constants and field normalization used by the
//! employee store before anything reaches the database.

use chrono::{DateTime, NaiveDate};
use shared::models::EmployeeRole;

use crate::db::repository::{RepoError, RepoResult};

// ── Text length limits ──────────────────────────────────────────────

/// First / last names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Manager label ("First Last")
pub const MAX_LABEL_LEN: usize = 401;

// ── Field helpers ───────────────────────────────────────────────────

/// Trim a required string; reject missing, blank or overlong values.
pub fn required_text(value: Option<String>, field: &str, max_len: usize) -> RepoResult<String> {
    let value = value.ok_or_else(|| RepoError::Validation(format!("{field} is required")))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RepoError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.chars().count()
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional string; blank becomes `None`.
pub fn optional_text(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> RepoResult<Option<String>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.chars().count() > max_len => Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))),
        Some(v) => Ok(Some(v.to_string())),
    }
}

/// Parse a required role against the closed set.
pub fn required_role(value: Option<String>) -> RepoResult<EmployeeRole> {
    let value = value.ok_or_else(|| RepoError::Validation("role is required".to_string()))?;
    value
        .trim()
        .parse::<EmployeeRole>()
        .map_err(|e| RepoError::InvalidRole(e.to_string()))
}

/// Parse an optional calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (truncated to its date).
pub fn optional_date(value: Option<String>, field: &str) -> RepoResult<Option<NaiveDate>> {
    let Some(raw) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| RepoError::Validation(format!("{field} is not a valid date: {raw}")))
}

/// Salary must be a finite, non-negative number.
pub fn optional_salary(value: Option<f64>) -> RepoResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(RepoError::Validation(format!(
            "salary must be a non-negative number, got {v}"
        ))),
        other => Ok(other),
    }
}
