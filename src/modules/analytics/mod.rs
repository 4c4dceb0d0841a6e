pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AnalyticsFilter, AnalyticsQuery, AnalyticsResult, Snapshot};
pub use services::AnalyticsService;
