//! HTTP API
//!
//! - [`employees`] - employee CRUD
//! - [`managers`] - manager with direct reports
//! - [`samples`] - demonstration data
//! - [`health`] - health check

pub mod employees;
pub mod health;
pub mod managers;
pub mod samples;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::{Config, ServerState};
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(managers::router())
        .merge(samples::router())
        .merge(health::router())
}

/// Build the application with all middleware; used by the HTTP server and oneshot calls
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS for the presentation layer
        .layer(cors_layer(&state.config))
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Request ID: generated outermost so logging sees it
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}

/// `APP_URL=*` allows any origin; otherwise only the configured one
fn cors_layer(config: &Config) -> CorsLayer {
    if config.app_url == "*" {
        if config.is_production() {
            tracing::warn!("APP_URL=* allows every origin in production");
        }
        return CorsLayer::permissive();
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    match HeaderValue::from_str(&config.app_url) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::warn!(app_url = %config.app_url, error = %e, "Invalid APP_URL, CORS origins disabled");
            layer
        }
    }
}
