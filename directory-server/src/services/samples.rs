//! Demonstration records inserted by `POST /sample-users`

use shared::models::{EmployeeCreate, EmployeeRole};

/// The manager every other sample reports to
pub fn sample_manager() -> EmployeeCreate {
    sample("John", "Doe", "john.doe@example.com", "2021-01-01", 1000.0, EmployeeRole::Manager)
}

/// Direct reports of the sample manager; `manager_label` is filled in by the caller
pub fn sample_reports(manager_label: &str) -> Vec<EmployeeCreate> {
    [
        sample("Jane", "Smith", "jane.smith@example.com", "2021-02-01", 800.0, EmployeeRole::Worker),
        sample("Jim", "Brown", "jim.brown@example.com", "2021-03-01", 700.0, EmployeeRole::Driver),
    ]
    .into_iter()
    .map(|mut e| {
        e.manager = Some(manager_label.to_string());
        e
    })
    .collect()
}

fn sample(
    first_name: &str,
    last_name: &str,
    email: &str,
    date_started: &str,
    salary: f64,
    role: EmployeeRole,
) -> EmployeeCreate {
    EmployeeCreate {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        email: Some(email.to_string()),
        date_started: Some(date_started.to_string()),
        salary: Some(salary),
        role: Some(role.to_string()),
        manager: None,
    }
}
