use async_trait::async_trait;

use crate::core::Result;

/// Records addressable by a numeric id
pub trait Identified {
    fn id(&self) -> i64;
}

/// Base read-only repository trait
/// The analytics layer never writes, so no mutating operations are exposed
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;
}
