//! Manager API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::ManagerWithReports;

use crate::core::ServerState;
use crate::utils::AppResult;

/// Manager record and its direct reports
///
/// 404 when the id is absent or the record is not a Manager.
pub async fn employees(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ManagerWithReports>> {
    let team = state.directory().manager_with_reports(&id).await?;
    Ok(Json(team))
}
