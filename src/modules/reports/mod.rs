pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DetailReport, EmployeeReport};
pub use services::ReportService;
