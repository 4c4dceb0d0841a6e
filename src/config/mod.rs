use crate::core::{AppError, Result};
use std::env;

pub mod database;
pub mod server;
pub mod storage;

pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches log output to structured JSON lines
    pub log_format: String,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Origins allowed besides `http://localhost:*`; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(&env::var("ALLOWED_ORIGINS").unwrap_or_default())
    }

    /// Parse a comma-separated origin list, ignoring blanks
    pub fn parse(raw: &str) -> Self {
        Self {
            allowed_origins: raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            server: ServerConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            cors: CorsConfig::from_env(),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        self.storage.validate()?;

        if self.app.is_production() && self.cors.allowed_origins.iter().any(|o| o == "*") {
            tracing::warn!("ALLOWED_ORIGINS contains '*' in production");
        }

        Ok(())
    }
}
