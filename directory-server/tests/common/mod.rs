//! Shared helpers for router-level tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use directory_server::api::{OneshotRouter, build_app};
use directory_server::{Config, ServerState};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;

pub struct TestApp {
    pub state: ServerState,
    router: Router<ServerState>,
}

impl TestApp {
    /// Fresh in-memory store per call
    pub async fn new() -> Self {
        let state = ServerState::initialize(&Config::for_tests())
            .await
            .expect("in-memory state");
        let router = build_app(&state);
        Self { state, router }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let mut router = self.router.clone();
        let response = router.oneshot(&self.state, request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes()
            .to_vec();
        (status, bytes)
    }

    /// Send and decode the body as JSON (`Null` when empty)
    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    /// Create an employee, asserting success; returns the stored record
    pub async fn create(&self, body: Value) -> Value {
        let (status, created) = self.json(Method::POST, "/user", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
        created
    }
}

pub fn employee(first: &str, last: &str, email: &str, role: &str) -> Value {
    serde_json::json!({
        "firstName": first,
        "lastName": last,
        "email": email,
        "role": role,
    })
}
