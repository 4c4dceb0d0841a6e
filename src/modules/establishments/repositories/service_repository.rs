// Read access to the service catalog.
//
// MySQL layout (table `services`):
//   id BIGINT, name VARCHAR(255), price DECIMAL(12,2) NULL,
//   duration INT NULL, category_id BIGINT NULL

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::establishments::models::Service;
use crate::storage::{InMemoryRepository, JsonFileRepository};

/// The catalog is global; establishments reference it by id
#[async_trait]
pub trait ServiceRepository: Repository<Service, i64> {
    /// Connectivity probe used by the readiness check
    async fn ping(&self) -> Result<()> {
        self.list().await.map(|_| ())
    }
}

impl ServiceRepository for JsonFileRepository<Service> {}

impl ServiceRepository for InMemoryRepository<Service> {}

const SELECT_SERVICES: &str = "SELECT id, name, price, duration, category_id FROM services";

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    price: Option<Decimal>,
    duration: Option<i32>,
    category_id: Option<i64>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            duration: row.duration.and_then(|minutes| u32::try_from(minutes).ok()),
            category_id: row.category_id,
        }
    }
}

pub struct MySqlServiceRepository {
    pool: MySqlPool,
}

impl MySqlServiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Service, i64> for MySqlServiceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Service>> {
        let sql = format!("{} WHERE id = ?", SELECT_SERVICES);
        let row = sqlx::query_as::<_, ServiceRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Service::from))
    }

    async fn list(&self) -> Result<Vec<Service>> {
        let sql = format!("{} ORDER BY id", SELECT_SERVICES);
        let rows = sqlx::query_as::<_, ServiceRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Service::from).collect())
    }
}

#[async_trait]
impl ServiceRepository for MySqlServiceRepository {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
