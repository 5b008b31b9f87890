//! Common test utilities for integration tests
//!
//! Every test runs the real router against a wiremock server standing in
//! for the upstream GraphQL platform, so upstream call counts and request
//! bodies can be asserted exactly.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use studio_admin_backend::{
    config::{AdminConfig, AppConfig, ServerConfig, UpstreamConfig},
    routes,
    state::AppState,
};
use tower::ServiceExt;
use wiremock::MockServer;

pub const ADMIN_EMAIL: &str = "admin@studio.test";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub upstream: MockServer,
}

impl TestApp {
    /// Create a new test application backed by a mock upstream
    pub async fn new() -> Self {
        let upstream = MockServer::start().await;
        let config = test_config(&upstream.uri(), "test-api-key");

        let state = AppState::new(config).expect("failed to build state");
        let app = routes::create_router(state);

        Self { app, upstream }
    }

    /// Like [`TestApp::new`] but with no upstream API key configured
    pub async fn without_api_key() -> Self {
        let upstream = MockServer::start().await;
        let config = test_config(&upstream.uri(), "");

        let state = AppState::new(config).expect("failed to build state");
        let app = routes::create_router(state);

        Self { app, upstream }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send("GET", path, None).await
    }

    /// Make a request with an optional JSON body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    /// Number of requests the mock upstream has received
    pub async fn upstream_request_count(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .expect("request recording is enabled")
            .len()
    }

    /// The GraphQL request bodies the upstream received, in arrival order
    pub async fn upstream_bodies(&self) -> Vec<Value> {
        self.upstream
            .received_requests()
            .await
            .expect("request recording is enabled")
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
            .collect()
    }
}

fn test_config(upstream_url: &str, api_key: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        upstream: UpstreamConfig {
            endpoint: format!("{}/graphql", upstream_url),
            api_key: api_key.to_string(),
            timeout_secs: 5,
        },
        admin: AdminConfig {
            email: ADMIN_EMAIL.to_string(),
            name: "Studio Admin".to_string(),
        },
    }
}

// ============================================================================
// Upstream response builders
// ============================================================================

/// A `{data: {items: {edges: [{node: ...}]}}}` query response
pub fn items_response(nodes: Vec<Value>) -> Value {
    json!({"data": {"items": connection(nodes)}})
}

/// An `{edges: [{node: ...}]}` connection fragment
pub fn connection(nodes: Vec<Value>) -> Value {
    let edges: Vec<Value> = nodes.into_iter().map(|node| json!({"node": node})).collect();
    json!({ "edges": edges })
}

/// A successful mutation payload carrying a record
pub fn mutation_success(record: Value) -> Value {
    json!({"data": {"payload": {"success": true, "errors": [], "record": record}}})
}

/// A successful mutation payload with no record (deletes)
pub fn mutation_done() -> Value {
    json!({"data": {"payload": {"success": true, "errors": []}}})
}

/// A `success: false` mutation payload with one error message
pub fn mutation_failure(message: &str) -> Value {
    json!({"data": {"payload": {"success": false, "errors": [{"message": message}]}}})
}
