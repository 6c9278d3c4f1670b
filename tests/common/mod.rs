//! Shared utilities for integration tests.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use finance_nav::config::AppConfig;
use finance_nav::http::server::build_router;
use finance_nav::http::{AppState, Snapshot};
use serde_json::Value;
use tower::ServiceExt;

/// State over the built-in route table.
pub fn default_state() -> AppState {
    state_for(AppConfig::default())
}

pub fn state_for(config: AppConfig) -> AppState {
    AppState::new(Snapshot::new(config).unwrap())
}

pub fn router(state: &AppState) -> Router {
    build_router(state.clone(), Duration::from_secs(5))
}

/// A response reduced to what tests assert on.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    TestResponse {
        status,
        request_id,
        body,
    }
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn get_with_headers(router: Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::get(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(router, builder.body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn put_json(router: Router, uri: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
