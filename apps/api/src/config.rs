use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default so the service boots with an empty
/// environment — a missing API key simply forces heuristic mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_base: String,
    pub use_fallback: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = optional_env("OPENAI_API_KEY").trim().to_string();

        Ok(Config {
            use_fallback: derive_use_fallback(&optional_env("USE_FALLBACK"), &openai_api_key),
            openai_api_key,
            openai_model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
            openai_api_base: env_or("OPENAI_API_BASE", "https://api.openai.com/v1"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Provider label reported by the root endpoint.
    pub fn provider(&self) -> &'static str {
        if self.use_fallback {
            "fallback"
        } else {
            "openai"
        }
    }
}

/// Heuristic mode is on when the flag says so ("1"/"true", any case) or when
/// there is no usable API key. No key means no provider to call.
fn derive_use_fallback(flag: &str, api_key: &str) -> bool {
    matches!(flag.to_lowercase().as_str(), "1" | "true") || api_key.trim().is_empty()
}

fn optional_env(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
