pub mod report_service;

pub use report_service::{detail_report, employee_report, ReportService};
