// Read access to establishments.
//
// MySQL layout (table `establishments`):
//   id BIGINT, name VARCHAR(255), services JSON, service_preferences JSON

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::Result;
use crate::modules::establishments::models::{Establishment, ServicePreference};
use crate::storage::{InMemoryRepository, JsonFileRepository};

#[async_trait]
pub trait EstablishmentRepository: Repository<Establishment, i64> {}

impl EstablishmentRepository for JsonFileRepository<Establishment> {}

impl EstablishmentRepository for InMemoryRepository<Establishment> {}

const SELECT_ESTABLISHMENTS: &str =
    "SELECT id, name, services, service_preferences FROM establishments";

#[derive(Debug, FromRow)]
struct EstablishmentRow {
    id: i64,
    name: String,
    services: Json<Vec<i64>>,
    service_preferences: Option<Json<BTreeMap<i64, ServicePreference>>>,
}

impl From<EstablishmentRow> for Establishment {
    fn from(row: EstablishmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            services: row.services.0,
            service_preferences: row
                .service_preferences
                .map(|prefs| prefs.0)
                .unwrap_or_default(),
        }
    }
}

pub struct MySqlEstablishmentRepository {
    pool: MySqlPool,
}

impl MySqlEstablishmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Establishment, i64> for MySqlEstablishmentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Establishment>> {
        let sql = format!("{} WHERE id = ?", SELECT_ESTABLISHMENTS);
        let row = sqlx::query_as::<_, EstablishmentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Establishment::from))
    }

    async fn list(&self) -> Result<Vec<Establishment>> {
        let rows = sqlx::query_as::<_, EstablishmentRow>(SELECT_ESTABLISHMENTS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Establishment::from).collect())
    }
}

impl EstablishmentRepository for MySqlEstablishmentRepository {}
