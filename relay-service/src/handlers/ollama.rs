//! Relay handlers for the Ollama-backed endpoints.
//!
//! Both handlers translate any upstream failure into a generic server
//! error; the relay never propagates raw upstream statuses.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::AppState;

/// Request to generate text from a prompt.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-text prompt, forwarded verbatim to the model.
    pub prompt: String,
}

/// Response carrying the model's generated text.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// List the models installed on the upstream Ollama server.
///
/// The upstream JSON body is returned unmodified.
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let models = state.ollama.list_models().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list models");
        AppError::UpstreamError(e.to_string())
    })?;

    Ok(Json(models))
}

/// Generate text for the given prompt.
///
/// The API key check happens in middleware before this handler runs,
/// so a rejected request never reaches the upstream server.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    tracing::info!(
        prompt_chars = payload.prompt.len(),
        "Forwarding generation request"
    );

    let response = state.ollama.generate(&payload.prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Generation failed");
        AppError::UpstreamError(e.to_string())
    })?;

    Ok(Json(GenerateResponse { response }))
}
