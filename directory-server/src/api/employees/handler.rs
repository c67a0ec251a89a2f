//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.directory().list_employees().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state.directory().get_employee(&id).await?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let Json(payload) = payload?;
    let employee = state.directory().create_employee(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee (partial)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<EmployeeResponse>> {
    let Json(payload) = payload?;
    let employee = state.directory().update_employee(&id, payload).await?;
    Ok(Json(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.directory().delete_employee(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
