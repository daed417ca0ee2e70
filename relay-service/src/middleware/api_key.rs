use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use service_core::error::AppError;

use crate::AppState;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Shared-secret check for the generation endpoint.
///
/// The header value is compared by exact string equality against the
/// configured key. Rejected requests are answered here, before any
/// outbound call is attempted.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match api_key {
        Some(key) if key == state.config.security.api_key.expose_secret().as_str() => {
            next.run(request).await
        }
        _ => {
            tracing::warn!("Rejected generation request with invalid API key");
            AppError::Unauthorized(anyhow::anyhow!("Invalid API key")).into_response()
        }
    }
}
