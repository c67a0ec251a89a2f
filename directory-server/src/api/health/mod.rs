//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness plus a store round-trip |
//!
//! # Response
//!
//! ```json
//! {
//!   "status": "ok",
//!   "version": "0.1.0",
//!   "employees": 3
//! }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// Stored employee count (absent when the store is unreachable)
    #[serde(skip_serializing_if = "Option::is_none")]
    employees: Option<u64>,
}

async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.directory().employee_count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                employees: Some(count),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed to reach the store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    employees: None,
                }),
            )
        }
    }
}
