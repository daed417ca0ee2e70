use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub ollama: OllamaConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server, without a trailing slash.
    pub base_url: String,
    /// Model identifier sent with every generation request (e.g., llama3).
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub api_key: Secret<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(Config {
            common,
            ollama: OllamaConfig {
                base_url: get_env("OLLAMA_BASE_URL", Some("http://localhost:11434"), is_prod)?,
                model: get_env("OLLAMA_MODEL", Some("llama3"), is_prod)?,
            },
            security: SecurityConfig {
                api_key: Secret::new(get_env("API_KEY", None, is_prod)?),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
