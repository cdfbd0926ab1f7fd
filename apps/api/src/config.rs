use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com/translate_tts";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external roadmap backend (auth, CRUD, dashboard).
    pub api_url: String,
    pub groq_api_key: String,
    /// When unset, culture chat history lives in process memory.
    pub redis_url: Option<String>,
    pub tts_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: optional_env("API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            groq_api_key: require_env("GROQ_API_KEY")?,
            redis_url: optional_env("REDIS_URL"),
            tts_base_url: optional_env("TTS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TTS_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Configuration used by tests: no Redis, local backend, dummy key.
    pub fn for_tests(api_url: &str) -> Self {
        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            groq_api_key: "test-key".to_string(),
            redis_url: None,
            tts_base_url: DEFAULT_TTS_BASE_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
