pub mod models;
pub mod repositories;

pub use models::{Appointment, AppointmentStatus, Assignment};
pub use repositories::AppointmentRepository;
