pub mod employee;
pub mod establishment;
pub mod service;

pub use employee::Employee;
pub use establishment::{Establishment, ServicePreference};
pub use service::Service;
