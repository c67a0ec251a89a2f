//! Employee API Module
//!
//! | Path | Method | Success |
//! |------|--------|---------|
//! | /users | GET | 200, all employees |
//! | /user | POST | 201, created employee |
//! | /user/{id} | GET | 200, employee |
//! | /user/{id} | PUT | 200, updated employee |
//! | /user/{id} | DELETE | 204, no body |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list))
        .route("/user", axum::routing::post(handler::create))
        .route(
            "/user/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
