pub mod aggregation;
pub mod analytics_service;
pub mod ranking;

pub use aggregation::{aggregate, Aggregation};
pub use analytics_service::{compute, AnalyticsService};
