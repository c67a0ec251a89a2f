//! Router extension for oneshot calls
//!
//! Drives the Router directly, without the network stack.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::Service;

use crate::core::ServerState;

/// Result type for oneshot API calls
pub type OneshotResult = Result<Response<Body>>;

/// Extension trait for Router to support oneshot calls
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a single request against `state`
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state = ServerState::initialize(&Config::for_tests()).await?;
    /// let request = Request::builder().uri("/users").body(Body::empty())?;
    /// let response = build_app(&state).oneshot(&state, request).await?;
    /// ```
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
