//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::util::double_option;

/// Employee role
///
/// Serialized with the exact variant name (`"Manager"`, `"Worker"`, `"Driver"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    Manager,
    Worker,
    Driver,
}

impl EmployeeRole {
    pub const ALL: [EmployeeRole; 3] = [Self::Manager, Self::Worker, Self::Driver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Worker => "Worker",
            Self::Driver => "Driver",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role '{0}': must be one of Manager, Worker, Driver")]
pub struct UnknownRole(pub String);

impl FromStr for EmployeeRole {
    type Err = UnknownRole;

    /// Case-sensitive, matching the stored representation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_started: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub role: EmployeeRole,
    /// Manager label ("First Last"), not a reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Create employee payload
///
/// Every field is optional at the wire level so that a missing required
/// field is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date_started: Option<String>,
    pub salary: Option<f64>,
    pub role: Option<String>,
    pub manager: Option<String>,
}

/// Update employee payload
///
/// Absent fields are left unchanged; `null` clears an optional field and is
/// rejected for required ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_started: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub manager: Option<Option<String>>,
}

/// A manager together with the employees whose label points at them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerWithReports {
    pub manager: EmployeeResponse,
    pub employees: Vec<EmployeeResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert_eq!("Manager".parse::<EmployeeRole>(), Ok(EmployeeRole::Manager));
        assert_eq!("Driver".parse::<EmployeeRole>(), Ok(EmployeeRole::Driver));
        assert_eq!(
            "manager".parse::<EmployeeRole>(),
            Err(UnknownRole("manager".to_string()))
        );
        assert!("Boss".parse::<EmployeeRole>().is_err());
    }

    #[test]
    fn test_role_serializes_as_variant_name() {
        let json = serde_json::to_string(&EmployeeRole::Worker).unwrap();
        assert_eq!(json, r#""Worker""#);
    }

    #[test]
    fn test_response_uses_camel_case_and_skips_absent_fields() {
        let employee = EmployeeResponse {
            id: "abc".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            date_started: NaiveDate::from_ymd_opt(2021, 2, 1),
            salary: None,
            role: EmployeeRole::Worker,
            manager: Some("John Doe".to_string()),
            created_at: 1,
            updated_at: 2,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["dateStarted"], "2021-02-01");
        assert_eq!(value["manager"], "John Doe");
        assert_eq!(value["createdAt"], 1);
        assert!(value.get("salary").is_none());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let patch: EmployeeUpdate =
            serde_json::from_str(r#"{"salary": 900, "manager": null}"#).unwrap();
        assert_eq!(patch.salary, Some(Some(900.0)));
        assert_eq!(patch.manager, Some(None));
        assert!(patch.first_name.is_none());
        assert!(patch.role.is_none());
    }

    #[test]
    fn test_create_ignores_unknown_fields() {
        let create: EmployeeCreate = serde_json::from_str(
            r#"{"firstName": "Jim", "lastName": "Brown", "nickname": "JB"}"#,
        )
        .unwrap();
        assert_eq!(create.first_name.as_deref(), Some("Jim"));
        assert!(create.email.is_none());
    }
}
