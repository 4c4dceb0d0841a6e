use tracing::{debug, warn};

use crate::core::Result;
use crate::modules::appointments::models::Appointment;
use crate::modules::establishments::models::{Employee, Establishment, Service};
use crate::storage::Repositories;

/// Everything a report needs about one establishment, fetched once
///
/// Reports run over this snapshot only, so concurrent bookings never
/// interleave with an aggregation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub establishment_id: i64,
    /// `None` when the establishment no longer exists
    pub establishment: Option<Establishment>,
    /// Whole service catalog
    pub catalog: Vec<Service>,
    /// Establishment roster
    pub employees: Vec<Employee>,
    /// Every appointment of the establishment, unfiltered
    pub appointments: Vec<Appointment>,
}

impl Snapshot {
    /// Fetch all four collections concurrently; any failure aborts the load
    pub async fn load(repos: &Repositories, establishment_id: i64) -> Result<Self> {
        let (establishment, catalog, employees, appointments) = tokio::try_join!(
            repos.establishments.find_by_id(establishment_id),
            repos.services.list(),
            repos.employees.list_by_establishment(establishment_id),
            repos.appointments.list_by_establishment(establishment_id),
        )?;

        if establishment.is_none() {
            warn!(
                establishment_id,
                "Establishment not found, reporting without its price overrides"
            );
        }

        debug!(
            establishment_id,
            services = catalog.len(),
            employees = employees.len(),
            appointments = appointments.len(),
            "Snapshot loaded"
        );

        Ok(Self {
            establishment_id,
            establishment,
            catalog,
            employees,
            appointments,
        })
    }
}
