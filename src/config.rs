//! Application configuration loaded from environment variables.
//!
//! All configuration is loaded from environment variables with sensible
//! defaults for development. In production, configure via environment
//! variables or a `.env` file.
//!
//! # Security Configuration
//!
//! - `API_KEY`: shared secret clients must present in the `x-api-key`
//!   header. The hardcoded fallback exists for local development only and
//!   must be overridden in any real deployment.
//! - `AUTH_BYPASS_PATHS`: exact-match paths allowed through without a key
//!   (default: `/health` for monitoring probes)

use std::env;

use crate::error::{ApiError, ApiResult};

/// Fallback API key used when `API_KEY` is unset.
pub const DEFAULT_API_KEY: &str = "Zhen2025";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address (default: "0.0.0.0")
    pub host: String,

    /// Server port (default: 3000)
    pub port: u16,

    /// Shared secret compared against the `x-api-key` request header
    pub api_key: String,

    /// Paths that bypass authentication (exact string match).
    /// Default: ["/health"]
    pub auth_bypass_paths: Vec<String>,

    /// Comma-separated list of allowed CORS origins ("*" allows any)
    pub cors_allowed_origins: Vec<String>,

    /// Maximum request body size in bytes (default: 1MB)
    pub max_request_body_size: usize,

    /// Log level (e.g., "info", "debug", "trace")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if any value is present but invalid
    /// (e.g., non-numeric PORT) or fails validation.
    pub fn from_env() -> ApiResult<Self> {
        // Load an .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: Self::parse_env("PORT", 3000)?,
            api_key: env::var("API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            auth_bypass_paths: Self::parse_auth_bypass_paths(),
            cors_allowed_origins: Self::parse_cors_origins(),
            max_request_body_size: Self::parse_env("MAX_REQUEST_BODY_SIZE", 1024 * 1024)?,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values for consistency and correctness.
    fn validate(&self) -> ApiResult<()> {
        if self.api_key.is_empty() {
            return Err(ApiError::Config("API_KEY must not be empty".to_string()));
        }

        if self.max_request_body_size == 0 {
            return Err(ApiError::Config(
                "MAX_REQUEST_BODY_SIZE must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the full server address for binding.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check whether the default development key is still in use.
    pub fn using_default_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }

    /// Parse an environment variable into the specified type with a default value.
    fn parse_env<T>(name: &str, default: T) -> ApiResult<T>
    where
        T: std::str::FromStr + ToString,
        T::Err: std::fmt::Display,
    {
        match env::var(name) {
            Ok(val) => val
                .parse()
                .map_err(|e| ApiError::Config(format!("Invalid {name}: {e}"))),
            Err(_) => Ok(default),
        }
    }

    /// Parse auth bypass paths from environment variable.
    ///
    /// Only paths that don't expose catalog data should be added.
    fn parse_auth_bypass_paths() -> Vec<String> {
        env::var("AUTH_BYPASS_PATHS")
            .unwrap_or_else(|_| "/health".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s.starts_with('/'))
            .collect()
    }

    /// Parse CORS allowed origins from environment variable.
    fn parse_cors_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Default configuration for testing and development.
///
/// Production deployments should use `Config::from_env()` instead.
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_key: DEFAULT_API_KEY.to_string(),
            auth_bypass_paths: vec!["/health".to_string()],
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}
