// Flat-file table store.
//
// Each table is one `<data_dir>/<table>.json` file holding a JSON array of
// records. A missing file reads as an empty table. Files are re-read on every
// call so a report always sees the latest write made by the booking flow.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::core::traits::{Identified, Repository};
use crate::core::{AppError, Result};

pub struct JsonFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    /// Create a repository over `<data_dir>/<table>.json`
    pub fn new(data_dir: impl AsRef<Path>, table: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", table)),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: DeserializeOwned> JsonFileRepository<T> {
    async fn read_all(&self) -> Result<Vec<T>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Table file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), "Failed to read table file: {}", e);
                return Err(AppError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            error!(path = %self.path.display(), "Malformed table file: {}", e);
            AppError::storage(format!("Malformed {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl<T> Repository<T, i64> for JsonFileRepository<T>
where
    T: DeserializeOwned + Identified + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<T>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|record| record.id() == id))
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.read_all().await
    }
}
