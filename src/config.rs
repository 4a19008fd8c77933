// src/config.rs

/// Application configuration loaded from environment variables, with a
/// `.env` file honored when present. Everything has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self {
            api_base_url: std::env::var("HRLENS_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
