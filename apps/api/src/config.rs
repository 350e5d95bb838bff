use anyhow::{Context, Result};

use crate::llm_client::LlmConfig;

const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub port: u16,
    pub rust_log: String,
    /// Directory the static frontend is served from.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm: LlmConfig {
                api_key: require_env("ANTHROPIC_API_KEY")?,
                model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_LLM_TIMEOUT_SECS.to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
