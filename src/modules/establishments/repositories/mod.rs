pub mod employee_repository;
pub mod establishment_repository;
pub mod service_repository;

pub use employee_repository::{EmployeeRepository, MySqlEmployeeRepository};
pub use establishment_repository::{EstablishmentRepository, MySqlEstablishmentRepository};
pub use service_repository::{MySqlServiceRepository, ServiceRepository};
