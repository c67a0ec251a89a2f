//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeRole, EmployeeUpdate};

use crate::db::repository::RepoResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_LABEL_LEN, MAX_NAME_LEN, optional_date, optional_salary, optional_text,
    required_role, required_text,
};

/// Employee ID type (record key inside the `employee` table)
pub type EmployeeId = String;

/// Employee row as read from the `employee` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub date_started: Option<NaiveDate>,
    #[serde(default)]
    pub salary: Option<f64>,
    pub role: EmployeeRole,
    #[serde(default)]
    pub manager: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Employee {
    /// Label other records use to name this employee as their manager
    pub fn manager_label(&self) -> String {
        manager_label(&self.first_name, &self.last_name)
    }

    pub fn is_manager(&self) -> bool {
        self.role == EmployeeRole::Manager
    }
}

/// "First Last", the denormalized form stored in `manager`
pub fn manager_label(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim())
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            date_started: e.date_started,
            salary: e.salary,
            role: e.role,
            manager: e.manager,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Validated, normalized fields of a new employee
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_started: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub role: EmployeeRole,
    pub manager: Option<String>,
}

impl EmployeeDraft {
    pub fn from_create(data: EmployeeCreate) -> RepoResult<Self> {
        Ok(Self {
            first_name: required_text(data.first_name, "firstName", MAX_NAME_LEN)?,
            last_name: required_text(data.last_name, "lastName", MAX_NAME_LEN)?,
            email: required_text(data.email, "email", MAX_EMAIL_LEN)?,
            date_started: optional_date(data.date_started, "dateStarted")?,
            salary: optional_salary(data.salary)?,
            role: required_role(data.role)?,
            manager: optional_text(data.manager, "manager", MAX_LABEL_LEN)?,
        })
    }

    /// Label these fields would be referred to by as a manager
    pub fn manager_label(&self) -> String {
        manager_label(&self.first_name, &self.last_name)
    }
}

/// Validated partial update: only the supplied fields, nothing else
///
/// Outer `None` = leave the column alone. For optional columns `Some(None)`
/// removes the value. Every rule is per field, so a patch that validates
/// here yields a valid record once merged into any valid row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub date_started: Option<Option<NaiveDate>>,
    pub salary: Option<Option<f64>>,
    pub role: Option<EmployeeRole>,
    pub manager: Option<Option<String>>,
}

impl EmployeePatch {
    /// `null` on a required field is passed through as missing and fails validation.
    pub fn from_update(patch: EmployeeUpdate) -> RepoResult<Self> {
        Ok(Self {
            first_name: patch
                .first_name
                .map(|v| required_text(v, "firstName", MAX_NAME_LEN))
                .transpose()?,
            last_name: patch
                .last_name
                .map(|v| required_text(v, "lastName", MAX_NAME_LEN))
                .transpose()?,
            email: patch
                .email
                .map(|v| required_text(v, "email", MAX_EMAIL_LEN))
                .transpose()?,
            date_started: patch
                .date_started
                .map(|v| optional_date(v, "dateStarted"))
                .transpose()?,
            salary: patch.salary.map(optional_salary).transpose()?,
            role: patch.role.map(required_role).transpose()?,
            manager: patch
                .manager
                .map(|v| optional_text(v, "manager", MAX_LABEL_LEN))
                .transpose()?,
        })
    }

    /// Columns receiving a value, keyed by stored field name
    pub fn assigned_values(&self) -> Map<String, Value> {
        let mut data = Map::new();
        if let Some(v) = &self.first_name {
            data.insert("first_name".into(), json!(v));
        }
        if let Some(v) = &self.last_name {
            data.insert("last_name".into(), json!(v));
        }
        if let Some(v) = &self.email {
            data.insert("email".into(), json!(v));
        }
        if let Some(Some(v)) = &self.date_started {
            data.insert("date_started".into(), json!(v));
        }
        if let Some(Some(v)) = self.salary {
            data.insert("salary".into(), json!(v));
        }
        if let Some(v) = self.role {
            data.insert("role".into(), json!(v.as_str()));
        }
        if let Some(Some(v)) = &self.manager {
            data.insert("manager".into(), json!(v));
        }
        data
    }

    /// Optional columns being cleared
    pub fn cleared_fields(&self) -> Vec<&'static str> {
        let mut cleared = Vec::new();
        if matches!(self.date_started, Some(None)) {
            cleared.push("date_started");
        }
        if matches!(self.salary, Some(None)) {
            cleared.push("salary");
        }
        if matches!(self.manager, Some(None)) {
            cleared.push("manager");
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;

    fn create_payload() -> EmployeeCreate {
        EmployeeCreate {
            first_name: Some(" Jane ".into()),
            last_name: Some("Smith".into()),
            email: Some(" jane.smith@example.com ".into()),
            date_started: Some("2021-02-01".into()),
            salary: Some(800.0),
            role: Some("Worker".into()),
            manager: Some("John Doe".into()),
        }
    }

    fn row() -> Employee {
        Employee {
            id: "e1".into(),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            date_started: NaiveDate::from_ymd_opt(2021, 2, 1),
            salary: Some(800.0),
            role: EmployeeRole::Worker,
            manager: Some("John Doe".into()),
            created_at: 10,
            updated_at: 10,
        }
    }

    #[test]
    fn test_from_create_normalizes() {
        let draft = EmployeeDraft::from_create(create_payload()).unwrap();
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.email, "jane.smith@example.com");
        assert_eq!(draft.role, EmployeeRole::Worker);
        assert_eq!(draft.date_started, NaiveDate::from_ymd_opt(2021, 2, 1));
    }

    #[test]
    fn test_from_create_requires_fields() {
        let mut payload = create_payload();
        payload.last_name = None;
        assert!(matches!(
            EmployeeDraft::from_create(payload),
            Err(RepoError::Validation(_))
        ));

        let mut payload = create_payload();
        payload.role = Some("Janitor".into());
        assert!(matches!(
            EmployeeDraft::from_create(payload),
            Err(RepoError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_patch_keeps_only_supplied_fields() {
        let patch = EmployeePatch::from_update(EmployeeUpdate {
            salary: Some(Some(950.0)),
            first_name: Some(Some(" Janet ".into())),
            ..Default::default()
        })
        .unwrap();

        let data = patch.assigned_values();
        assert_eq!(data.len(), 2);
        assert_eq!(data["first_name"], "Janet");
        assert_eq!(data["salary"].as_f64(), Some(950.0));
        assert!(patch.cleared_fields().is_empty());
    }

    #[test]
    fn test_patch_null_clears_optional_and_rejects_required() {
        let patch = EmployeePatch::from_update(EmployeeUpdate {
            manager: Some(None),
            date_started: Some(Some("".into())),
            ..Default::default()
        })
        .unwrap();
        assert!(patch.assigned_values().is_empty());
        assert_eq!(patch.cleared_fields(), vec!["date_started", "manager"]);

        let err = EmployeePatch::from_update(EmployeeUpdate {
            email: Some(None),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = EmployeePatch::from_update(EmployeeUpdate {
            role: Some(Some("Boss".into())),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, RepoError::InvalidRole(_)));
    }

    #[test]
    fn test_patch_writes_dates_and_roles_as_stored() {
        let patch = EmployeePatch::from_update(EmployeeUpdate {
            date_started: Some(Some("2021-03-01T08:00:00Z".into())),
            role: Some(Some("Driver".into())),
            ..Default::default()
        })
        .unwrap();
        let data = patch.assigned_values();
        assert_eq!(data["date_started"], "2021-03-01");
        assert_eq!(data["role"], "Driver");
    }

    #[test]
    fn test_manager_label() {
        assert_eq!(manager_label(" John", "Doe "), "John Doe");
        let mut manager = row();
        manager.first_name = "John".into();
        manager.last_name = "Doe".into();
        assert_eq!(manager.manager_label(), "John Doe");
        assert!(!manager.is_manager());
    }
}
