/// Common test utilities for integration tests
///
/// Every test gets its own router over a fresh `MemStorage`, so tests never
/// see each other's records.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gathering_api::app::{build_router, AppState};
use gathering_api::config::Config;
use gathering_shared::store::MemStorage;
use serde_json::{json, Value};
use tower::Service as _;

/// Test context containing the application under test
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
}

impl TestContext {
    /// Creates a new test context over a freshly seeded store
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new test context with a specific configuration
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(MemStorage::new(), config);
        let app = build_router(state.clone());
        TestContext { app, state }
    }

    /// Sends a GET request and returns status and parsed JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Sends a POST request with a JSON body
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    /// Sends a POST request with an arbitrary body labelled as JSON
    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body).into_owned())
            })
        };

        (status, value)
    }
}

/// A valid event body
pub fn food_drive() -> Value {
    json!({
        "title": "Food Drive",
        "date": "2023-11-05",
        "time": "09:00",
        "location": "Main Hall",
        "description": "A drive to collect food for families in need.",
        "category": "charity"
    })
}
