use std::env;

use serde::Deserialize;
use url::Url;

use crate::i18n;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the scheduling backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout for backend calls.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Language for user-facing messages ("pt" or "en").
    pub lang: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            },
            backend: BackendConfig {
                base_url: parse_base_url(
                    &env::var("BACKEND_API_URL")
                        .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                )?,
                timeout_seconds: env::var("BACKEND_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            },
            display: DisplayConfig {
                lang: parse_lang(&env::var("APP_LANG").unwrap_or_else(|_| "pt".to_string()))?,
            },
        })
    }
}

/// Validate the backend base URL and strip any trailing slash so request
/// paths can be appended with `format!`.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw).map_err(|_| ConfigError::InvalidValue("BACKEND_API_URL".to_string()))?;
    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_lang(raw: &str) -> Result<String, ConfigError> {
    let lang = i18n::normalize_language(raw);
    if !i18n::is_supported_language(&lang) {
        return Err(ConfigError::InvalidValue("APP_LANG".to_string()));
    }
    Ok(lang)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            backend: BackendConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: 30,
            },
            display: DisplayConfig {
                lang: "pt".to_string(),
            },
        }
    }
}
