//! Application startup and lifecycle management.

use crate::config::Config;
use crate::services::OllamaClient;
use crate::{handlers, middleware};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ollama: OllamaClient,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener here so tests can pass port 0 and read the
    /// assigned port back via [`Application::port`].
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let ollama = OllamaClient::new(config.ollama.clone());
        tracing::info!(
            base_url = %config.ollama.base_url,
            model = %config.ollama.model,
            "Initialized Ollama client"
        );

        let state = AppState {
            config: config.clone(),
            ollama,
        };

        let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid listen address: {}", e))
            })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Relay service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

fn build_router(state: AppState) -> Router {
    // Only the generation endpoint requires the shared secret.
    let generate_routes = Router::new()
        .route("/generate", post(handlers::ollama::generate))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::api_key_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/models", get(handlers::ollama::list_models))
        .merge(generate_routes)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
