//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default model to use. The answering quality/cost tradeoff of the demo.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default rate limit between requests in milliseconds.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 500;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the chat-completion service.
    pub api_key: String,
    /// Model name (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL override. None uses the OpenAI API default.
    pub base_url: Option<String>,
    /// Sampling temperature applied when a request doesn't set one.
    pub temperature: f32,
    /// Milliseconds to wait between requests.
    pub rate_limit_ms: u64,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for the chat-completion service
    ///
    /// Optional:
    /// - `POTAGER_AI_MODEL`: Model name (default: "gpt-4o-mini")
    /// - `POTAGER_AI_BASE_URL`: API base URL (default: OpenAI)
    /// - `POTAGER_AI_TEMPERATURE`: Sampling temperature (default: 0.5)
    /// - `POTAGER_AI_RATE_LIMIT_MS`: Rate limit in ms (default: 500)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = env::var("POTAGER_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("POTAGER_AI_BASE_URL").ok();

        let temperature = env::var("POTAGER_AI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let rate_limit_ms = env::var("POTAGER_AI_RATE_LIMIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_MS);

        Ok(Self {
            api_key,
            model,
            base_url,
            temperature,
            rate_limit_ms,
        })
    }
}
