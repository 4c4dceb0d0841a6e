//! Appointment analytics and commission engine for a salon booking marketplace
//!
//! Establishments read revenue, commission and performance reports computed
//! from their completed appointments, priced with their current overrides.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use modules::analytics;
pub use modules::appointments;
pub use modules::establishments;
pub use modules::reports;
pub use storage::Repositories;
