//! Manager API Module
//!
//! | Path | Method | Success |
//! |------|--------|---------|
//! | /manager/{id}/employees | GET | 200, `{manager, employees}` |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Manager router
pub fn router() -> Router<ServerState> {
    Router::new().route("/manager/{id}/employees", get(handler::employees))
}
