//! Directory Service
//!
//! Stateless employee operations. Every call goes to the store; the service
//! only adds the rules the schema cannot express (manager resolution) and
//! turns store outcomes into tagged [`AppError`]s.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    EmployeeCreate, EmployeeResponse, EmployeeUpdate, ManagerWithReports,
};

use super::samples;
use crate::db::models::{Employee, EmployeeDraft, EmployeePatch};
use crate::db::repository::EmployeeRepository;

#[derive(Clone, Debug)]
pub struct DirectoryService {
    repo: EmployeeRepository,
}

impl DirectoryService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn list_employees(&self) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.repo.find_all().await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn get_employee(&self, id: &str) -> AppResult<EmployeeResponse> {
        self.find(id).await.map(Into::into)
    }

    pub async fn create_employee(&self, payload: EmployeeCreate) -> AppResult<EmployeeResponse> {
        let draft = EmployeeDraft::from_create(payload)?;
        let employee = self.repo.insert(draft).await?;
        tracing::info!(id = %employee.id, role = %employee.role, "Employee created");
        Ok(employee.into())
    }

    /// Apply a partial update. Only the supplied fields are written; each one
    /// is validated like its create counterpart and the schema checks the rest.
    pub async fn update_employee(
        &self,
        id: &str,
        payload: EmployeeUpdate,
    ) -> AppResult<EmployeeResponse> {
        let patch = EmployeePatch::from_update(payload)?;
        let employee = self
            .repo
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| employee_not_found(id))?;
        tracing::info!(id = %employee.id, "Employee updated");
        Ok(employee.into())
    }

    /// Hard delete. Reports naming this employee as manager keep their label.
    pub async fn delete_employee(&self, id: &str) -> AppResult<()> {
        if !self.repo.delete_by_id(id).await? {
            return Err(employee_not_found(id));
        }
        tracing::info!(id = %id, "Employee deleted");
        Ok(())
    }

    /// Manager record plus every employee whose `manager` label is the manager's name
    ///
    /// Two independent reads; the pair is not a consistent snapshot.
    pub async fn manager_with_reports(&self, id: &str) -> AppResult<ManagerWithReports> {
        let manager = self
            .repo
            .find_by_id(id)
            .await?
            .filter(Employee::is_manager)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ManagerNotFound,
                    format!("Manager {} not found", id),
                )
                .with_detail("id", id)
            })?;

        let employees = self.repo.find_by_manager_label(&manager.manager_label()).await?;

        Ok(ManagerWithReports {
            manager: manager.into(),
            employees: employees.into_iter().map(Into::into).collect(),
        })
    }

    /// Insert the demonstration records in one transaction. Not idempotent:
    /// when any sample email is taken the call fails and nothing is written.
    pub async fn seed_sample_employees(&self) -> AppResult<Vec<EmployeeResponse>> {
        let manager = EmployeeDraft::from_create(samples::sample_manager())?;
        let label = manager.manager_label();

        let mut drafts = vec![manager];
        for report in samples::sample_reports(&label) {
            drafts.push(EmployeeDraft::from_create(report)?);
        }

        let created = self.repo.insert_all(drafts).await?;
        tracing::info!(count = created.len(), "Sample employees added");
        Ok(created.into_iter().map(Into::into).collect())
    }

    pub async fn employee_count(&self) -> AppResult<u64> {
        Ok(self.repo.count().await?)
    }

    async fn find(&self, id: &str) -> AppResult<Employee> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }
}

fn employee_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {} not found", id))
        .with_detail("id", id)
}
