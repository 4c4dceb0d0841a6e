pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Employee, Establishment, Service, ServicePreference};
pub use repositories::{EmployeeRepository, EstablishmentRepository, ServiceRepository};
pub use services::PriceResolver;
