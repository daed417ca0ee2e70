//! HTTP handlers for relay-service.

pub mod ollama;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The body is part of the public contract, so no
/// extra fields are added here.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Readiness probe for container orchestration. The relay holds no
/// connections to verify, so readiness equals liveness.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}
