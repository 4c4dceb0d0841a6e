// Storage backends and the repository bundle injected into services.
//
// Two interchangeable backends sit behind the same traits: flat JSON files
// and MySQL. Tests use the in-memory store.

pub mod json_file;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use sqlx::MySqlPool;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::{AppError, Result};
use crate::modules::appointments::models::Appointment;
use crate::modules::appointments::repositories::{
    AppointmentRepository, MySqlAppointmentRepository,
};
use crate::modules::establishments::models::{Employee, Establishment, Service};
use crate::modules::establishments::repositories::{
    EmployeeRepository, EstablishmentRepository, MySqlEmployeeRepository,
    MySqlEstablishmentRepository, MySqlServiceRepository, ServiceRepository,
};

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;

/// Read-only data access handles for one running application
#[derive(Clone)]
pub struct Repositories {
    pub appointments: Arc<dyn AppointmentRepository>,
    pub establishments: Arc<dyn EstablishmentRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
}

impl Repositories {
    /// Flat-file backend rooted at `data_dir`
    pub fn json(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            appointments: Arc::new(JsonFileRepository::<Appointment>::new(dir, "appointments")),
            establishments: Arc::new(JsonFileRepository::<Establishment>::new(
                dir,
                "establishments",
            )),
            services: Arc::new(JsonFileRepository::<Service>::new(dir, "services")),
            employees: Arc::new(JsonFileRepository::<Employee>::new(dir, "employees")),
        }
    }

    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            appointments: Arc::new(MySqlAppointmentRepository::new(pool.clone())),
            establishments: Arc::new(MySqlEstablishmentRepository::new(pool.clone())),
            services: Arc::new(MySqlServiceRepository::new(pool.clone())),
            employees: Arc::new(MySqlEmployeeRepository::new(pool)),
        }
    }

    pub fn in_memory(
        establishments: Vec<Establishment>,
        services: Vec<Service>,
        employees: Vec<Employee>,
        appointments: Vec<Appointment>,
    ) -> Self {
        Self {
            appointments: Arc::new(InMemoryRepository::new(appointments)),
            establishments: Arc::new(InMemoryRepository::new(establishments)),
            services: Arc::new(InMemoryRepository::new(services)),
            employees: Arc::new(InMemoryRepository::new(employees)),
        }
    }

    /// Build the configured backend
    pub async fn from_config(config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::Json => {
                info!("Using JSON file storage at {}", config.data_dir.display());
                Ok(Self::json(&config.data_dir))
            }
            StorageBackend::MySql => {
                let database = config.database.as_ref().ok_or_else(|| {
                    AppError::Configuration(
                        "DATABASE_URL is required for the mysql storage backend".to_string(),
                    )
                })?;
                let pool = database.create_pool().await?;
                if database.run_migrations {
                    database.migrate(&pool).await?;
                    info!("Database migrations applied");
                }
                info!(
                    "Using MySQL storage ({} max connections)",
                    database.max_connections
                );
                Ok(Self::mysql(pool))
            }
        }
    }

    /// Whether the backing store answers at all
    pub async fn ping(&self) -> Result<()> {
        self.services.ping().await
    }
}
