// Read access to appointments.
//
// MySQL layout (table `appointments`):
//   id BIGINT, establishment_id BIGINT, date DATE, time VARCHAR(5),
//   status VARCHAR(20), services JSON, assignments JSON,
//   total_price DECIMAL(12,2), total_duration INT

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, MySqlPool};

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::appointments::models::{Appointment, AppointmentStatus, Assignment};
use crate::storage::{InMemoryRepository, JsonFileRepository};

#[async_trait]
pub trait AppointmentRepository: Repository<Appointment, i64> {
    /// Every appointment of an establishment, unfiltered
    async fn list_by_establishment(&self, establishment_id: i64) -> Result<Vec<Appointment>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|apt| apt.establishment_id == establishment_id)
            .collect())
    }
}

impl AppointmentRepository for JsonFileRepository<Appointment> {}

impl AppointmentRepository for InMemoryRepository<Appointment> {}

const SELECT_APPOINTMENTS: &str = r#"
    SELECT id, establishment_id, date, time, status, services, assignments,
           total_price, total_duration
    FROM appointments
"#;

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: i64,
    establishment_id: i64,
    date: NaiveDate,
    time: String,
    status: String,
    services: Json<Vec<i64>>,
    assignments: Json<Vec<Assignment>>,
    total_price: Decimal,
    total_duration: i32,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = AppError;

    fn try_from(row: AppointmentRow) -> Result<Self> {
        let status = row.status.parse::<AppointmentStatus>().map_err(|e: String| {
            AppError::storage(format!("Appointment {}: {}", row.id, e))
        })?;

        Ok(Appointment {
            id: row.id,
            establishment_id: row.establishment_id,
            date: row.date,
            time: row.time,
            status,
            services: row.services.0,
            assignments: row.assignments.0,
            total_price: row.total_price,
            total_duration: u32::try_from(row.total_duration).unwrap_or_default(),
        })
    }
}

/// Repository backed by the hosted relational store
pub struct MySqlAppointmentRepository {
    pool: MySqlPool,
}

impl MySqlAppointmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Appointment, i64> for MySqlAppointmentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        let sql = format!("{} WHERE id = ?", SELECT_APPOINTMENTS);
        sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Appointment>> {
        sqlx::query_as::<_, AppointmentRow>(SELECT_APPOINTMENTS)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }
}

#[async_trait]
impl AppointmentRepository for MySqlAppointmentRepository {
    async fn list_by_establishment(&self, establishment_id: i64) -> Result<Vec<Appointment>> {
        let sql = format!(
            "{} WHERE establishment_id = ? ORDER BY date, time, id",
            SELECT_APPOINTMENTS
        );
        sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(establishment_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }
}
