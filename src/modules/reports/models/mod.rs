pub mod detail_report;
pub mod employee_report;

pub use detail_report::{DetailReport, EmployeeDetail, ServiceDetail};
pub use employee_report::{
    EmployeeReport, EmployeeReportRow, EmployeeReportSummary, ReportMonth, ALL_PERIODS_LABEL,
    UNASSIGNED_EMPLOYEE_NAME,
};
