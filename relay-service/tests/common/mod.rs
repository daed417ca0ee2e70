//! Test helpers for relay-service integration tests.

#![allow(dead_code)]

use relay_service::config::{Config, OllamaConfig, SecurityConfig};
use relay_service::startup::Application;
use secrecy::Secret;
use service_core::config as core_config;
use std::time::Duration;

pub const TEST_API_KEY: &str = "test-relay-key";
pub const TEST_MODEL: &str = "llama3";

/// Test application bound to a random local port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the relay pointed at the given upstream base URL.
    pub async fn spawn(upstream_url: &str) -> Self {
        let config = Config {
            common: core_config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            ollama: OllamaConfig {
                base_url: upstream_url.trim_end_matches('/').to_string(),
                model: TEST_MODEL.to_string(),
            },
            security: SecurityConfig {
                api_key: Secret::new(TEST_API_KEY.to_string()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();

        // Wait for the server to accept connections.
        for _ in 0..20 {
            let probe = client
                .get(format!("{}/health", address))
                .timeout(Duration::from_millis(200))
                .send()
                .await;
            if probe.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        Self {
            address,
            port,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
