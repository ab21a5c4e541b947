//! Shared helpers for route tests.

use std::time::Duration;

use aigw_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use aigw_axum::routes::create_router;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory registry.
pub async fn test_app() -> Router {
    let config = ServerConfig::with_defaults()
        .with_port(0)
        .with_database_url("sqlite::memory:")
        .with_upstream_timeout(Duration::from_secs(5));
    let ctx = bootstrap(&config).await.unwrap();
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Send one request and return the status with the body parsed as JSON
/// (`Value::Null` for an empty body, a JSON string for non-JSON text).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
