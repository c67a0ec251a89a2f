//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, check_statements, take_rows};
use crate::db::models::{Employee, EmployeeDraft, EmployeePatch};
use serde_json::Value;
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use uuid::Uuid;

/// Projection shared by every read; exposes the record key as `id`
const EMPLOYEE_FIELDS: &str = "record::id(id) AS id, first_name, last_name, email, \
     date_started, salary, role, manager, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {EMPLOYEE_FIELDS} FROM employee ORDER BY created_at, id"
            ))
            .await?;
        take_rows(&mut result, 0)
    }

    /// Find employee by id; `None` when absent
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {EMPLOYEE_FIELDS} FROM type::thing('employee', $id)"
            ))
            .bind(("id", id.to_string()))
            .await?;
        let employees: Vec<Employee> = take_rows(&mut result, 0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employees whose `manager` label equals `label` exactly (case-sensitive)
    pub async fn find_by_manager_label(&self, label: &str) -> RepoResult<Vec<Employee>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {EMPLOYEE_FIELDS} FROM employee WHERE manager = $label ORDER BY created_at, id"
            ))
            .bind(("label", label.to_string()))
            .await?;
        take_rows(&mut result, 0)
    }

    /// Number of stored employees
    pub async fn count(&self) -> RepoResult<u64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM employee GROUP ALL")
            .await?;
        let rows: Vec<serde_json::Value> = result.take(0)?;
        Ok(rows
            .first()
            .and_then(|row| row.get("total"))
            .and_then(|total| total.as_u64())
            .unwrap_or(0))
    }

    /// Insert a new employee
    ///
    /// The unique index on `email` rejects duplicates inside the store.
    pub async fn insert(&self, draft: EmployeeDraft) -> RepoResult<Employee> {
        self.insert_all(vec![draft])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Insert returned no record".to_string()))
    }

    /// Insert every draft in one transaction: all are stored or none is
    pub async fn insert_all(&self, drafts: Vec<EmployeeDraft>) -> RepoResult<Vec<Employee>> {
        let ids: Vec<String> = drafts
            .iter()
            .map(|_| Uuid::new_v4().simple().to_string())
            .collect();
        let emails: Vec<String> = drafts.iter().map(|d| d.email.clone()).collect();

        let mut sql = String::from("BEGIN TRANSACTION;\n");
        for i in 0..drafts.len() {
            sql.push_str(&create_statement(i));
        }
        sql.push_str("COMMIT TRANSACTION;");

        let mut query = self.base.db().query(sql).bind(("now", now_millis()));
        for (i, (id, draft)) in ids.iter().zip(drafts).enumerate() {
            query = query
                .bind((format!("id_{i}"), id.clone()))
                .bind((format!("first_name_{i}"), draft.first_name))
                .bind((format!("last_name_{i}"), draft.last_name))
                .bind((format!("email_{i}"), draft.email))
                .bind((format!("date_started_{i}"), draft.date_started))
                .bind((format!("salary_{i}"), draft.salary))
                .bind((format!("role_{i}"), draft.role.as_str()))
                .bind((format!("manager_{i}"), draft.manager));
        }

        let outcome = match query.await {
            Ok(response) => check_statements(response),
            Err(e) => Err(e.into()),
        };
        if let Err(err) = outcome {
            return Err(self.explain_write_error(err, &emails, None).await);
        }

        let mut created = Vec::with_capacity(ids.len());
        for id in &ids {
            let employee = self.find_by_id(id).await?.ok_or_else(|| {
                RepoError::Database(format!("Employee {} vanished after insert", id))
            })?;
            created.push(employee);
        }
        Ok(created)
    }

    /// Write only the fields present in `patch`; `None` when absent
    ///
    /// Supplied values come from `$data`, cleared optionals become `NONE`
    /// (removed) and `updated_at` moves forward, all in one statement. Fields
    /// not in the patch are never written, so concurrent patches of different
    /// fields both survive.
    pub async fn update_by_id(&self, id: &str, patch: EmployeePatch) -> RepoResult<Option<Employee>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let data = patch.assigned_values();
        let mut assignments: Vec<String> = data
            .keys()
            .map(|field| format!("{field} = $data.{field}"))
            .collect();
        assignments.extend(patch.cleared_fields().iter().map(|field| format!("{field} = NONE")));
        assignments.push("updated_at = math::max([$now, updated_at + 1])".to_string());

        let outcome = match self
            .base
            .db()
            .query(format!(
                "UPDATE type::thing('employee', $id) SET {} RETURN NONE",
                assignments.join(", ")
            ))
            .bind(("id", id.to_string()))
            .bind(("data", Value::Object(data)))
            .bind(("now", now_millis()))
            .await
        {
            Ok(response) => check_statements(response),
            Err(e) => Err(e.into()),
        };
        if let Err(err) = outcome {
            let emails: Vec<String> = patch.email.iter().cloned().collect();
            return Err(self.explain_write_error(err, &emails, Some(id)).await);
        }

        self.find_by_id(id).await
    }

    /// Emails from `emails` already held by a record other than `exclude`
    async fn taken_emails(&self, emails: &[String], exclude: Option<&str>) -> RepoResult<Vec<String>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT VALUE email FROM employee \
                 WHERE email INSIDE $emails AND record::id(id) != $exclude",
            )
            .bind(("emails", emails.to_vec()))
            .bind(("exclude", exclude.map(str::to_string)))
            .await?;
        take_rows(&mut result, 0)
    }

    /// Name the offending email when a write lost to the unique index,
    /// including a transaction that lost the race against a concurrent insert
    async fn explain_write_error(
        &self,
        err: RepoError,
        emails: &[String],
        exclude: Option<&str>,
    ) -> RepoError {
        if !matches!(err, RepoError::Duplicate(_) | RepoError::WriteConflict(_)) || emails.is_empty()
        {
            return err;
        }
        match self.taken_emails(emails, exclude).await {
            Ok(taken) if !taken.is_empty() => {
                RepoError::Duplicate(format!("Email '{}' already exists", taken.join("', '")))
            }
            Ok(_) => err,
            Err(lookup) => lookup,
        }
    }

    /// Hard delete; `false` when absent. Nothing else is touched.
    pub async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.base
            .db()
            .query("DELETE type::thing('employee', $id)")
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(true)
    }
}

/// `CREATE` for the `i`-th draft of a batch; parameters are suffixed with `_i`
fn create_statement(i: usize) -> String {
    format!(
        "CREATE type::thing('employee', $id_{i}) SET \
         first_name = $first_name_{i}, last_name = $last_name_{i}, email = $email_{i}, \
         date_started = $date_started_{i}, salary = $salary_{i}, role = $role_{i}, \
         manager = $manager_{i}, created_at = $now, updated_at = $now RETURN NONE;\n"
    )
}
