//! Ollama inference server client.
//!
//! Wraps the two upstream endpoints the relay forwards to: tag listing
//! and non-streaming text generation.

use crate::config::OllamaConfig;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for interacting with a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

/// Request body for Ollama's generate endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    /// Model identifier (e.g., "llama3").
    model: &'a str,
    /// The prompt text, forwarded verbatim.
    prompt: &'a str,
    /// Streaming is always disabled; the relay returns one body.
    stream: bool,
}

/// The slice of Ollama's generate response the relay cares about.
/// Ollama also returns timing and context fields, all ignored here.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a new Ollama client.
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch the list of installed models from Ollama.
    ///
    /// Returns the upstream JSON body unmodified so callers can pass it
    /// straight through.
    pub async fn list_models(&self) -> Result<serde_json::Value> {
        let url = format!("{}/api/tags", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach Ollama at {}: {}", url, e))?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "Ollama tag listing response");

        if status.is_success() {
            let models: serde_json::Value = serde_json::from_str(&body)?;
            Ok(models)
        } else {
            tracing::error!(status = %status, body = %body, "Ollama tag listing failed");
            Err(anyhow!("Failed to fetch models from Ollama"))
        }
    }

    /// Run a non-streaming generation for the given prompt.
    ///
    /// Returns the `response` field of the upstream body, or an empty
    /// string when the field is absent.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach Ollama at {}: {}", url, e))?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "Ollama generate response");

        if status.is_success() {
            let output: GenerateResponse = serde_json::from_str(&body)?;
            tracing::info!(
                model = %self.config.model,
                response_chars = output.response.len(),
                "Generation completed"
            );
            Ok(output.response)
        } else {
            tracing::error!(status = %status, body = %body, "Ollama generation failed");
            Err(anyhow!("Ollama model error"))
        }
    }
}
