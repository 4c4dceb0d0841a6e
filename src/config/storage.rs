use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::core::{AppError, Result};

/// Which persistence backend serves the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON array file per table under `data_dir`
    Json,
    MySql,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "file" => Ok(StorageBackend::Json),
            "mysql" => Ok(StorageBackend::MySql),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub database: Option<DatabaseConfig>,
}

impl StorageConfig {
    pub fn json(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::Json,
            data_dir: data_dir.into(),
            database: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let database = DatabaseConfig::from_env()?;

        // Default to MySQL only when a database is actually configured
        let backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse::<StorageBackend>().map_err(AppError::Configuration)?,
            Err(_) if database.is_some() => StorageBackend::MySql,
            Err(_) => StorageBackend::Json,
        };

        Ok(Self {
            backend,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            database,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::MySql && self.database.is_none() {
            return Err(AppError::Configuration(
                "STORAGE_BACKEND=mysql requires DATABASE_URL".to_string(),
            ));
        }
        Ok(())
    }
}
