mod report_controller;

pub use report_controller::{configure, get_detail_report, get_employee_report};
