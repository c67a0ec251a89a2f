//! Sample data API Module

use axum::{Router, extract::State, http::StatusCode, routing::post};

use crate::core::ServerState;
use crate::utils::AppResult;

/// Sample data router
pub fn router() -> Router<ServerState> {
    Router::new().route("/sample-users", post(seed))
}

/// Insert the demonstration employees
async fn seed(State(state): State<ServerState>) -> AppResult<(StatusCode, &'static str)> {
    state.directory().seed_sample_employees().await?;
    Ok((StatusCode::CREATED, "Sample users added successfully"))
}
