//! Application configuration management
//!
//! Configuration is read from environment variables (a `.env` file is honored)
//! once at startup and validated before the server binds.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_CODEFORCES_API_URL, DEFAULT_CODEFORCES_TIMEOUT_SECONDS,
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_RUST_LOG, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Result<Config, ConfigError>> = LazyLock::new(Config::from_env);

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub codeforces: CodeforcesConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Codeforces API client configuration
#[derive(Debug, Clone)]
pub struct CodeforcesConfig {
    /// Base URL, always ending with `/`
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            codeforces: CodeforcesConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl CodeforcesConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("CODEFORCES_API_URL")
            .unwrap_or_else(|_| DEFAULT_CODEFORCES_API_URL.to_string());

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            timeout_seconds: parse_var("CODEFORCES_TIMEOUT_SECONDS", DEFAULT_CODEFORCES_TIMEOUT_SECONDS)?,
        })
    }
}

impl Default for CodeforcesConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CODEFORCES_API_URL.to_string(),
            timeout_seconds: DEFAULT_CODEFORCES_TIMEOUT_SECONDS,
        }
    }
}

/// Read and parse an optional variable, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
