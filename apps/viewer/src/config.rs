use anyhow::Result;

/// Compile-time default for the backend origin. `API_BASE_URL` overrides
/// it, which is mainly useful for pointing local setups at another port.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Debounce quiescence window for the skill-search input.
pub const DEBOUNCE_MS: u64 = 300;

/// Application configuration loaded from environment variables. Every
/// value has a default, so startup never fails on missing env.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
