use async_trait::async_trait;

use crate::core::traits::{Identified, Repository};
use crate::core::Result;

/// Fixed in-memory table, used for fixtures and tests
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<T> Repository<T, i64> for InMemoryRepository<T>
where
    T: Clone + Identified + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<T>> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.records.clone())
    }
}
