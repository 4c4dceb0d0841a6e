use rust_decimal::Decimal;
use serde::Serialize;

/// Label of the row collecting services no roster employee performed
pub const UNASSIGNED_EMPLOYEE_NAME: &str = "Sem funcionário atribuído";

/// Label used when the report covers every period
pub const ALL_PERIODS_LABEL: &str = "Todos os períodos";

/// Financial report split per employee for one month or all time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeReport {
    pub report: Vec<EmployeeReportRow>,
    pub summary: EmployeeReportSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReportRow {
    /// `None` on the unassigned row
    pub employee_id: Option<i64>,
    pub employee_name: String,
    /// Distinct completed appointments
    pub appointment_count: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employee_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub establishment_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReportSummary {
    pub total_appointments: u64,
    /// Prices frozen on the appointments at booking time
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_employee_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_establishment_revenue: Decimal,
    /// `M/YYYY` or [`ALL_PERIODS_LABEL`]
    pub period: String,
}

/// Reporting window of the employee report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    /// 1 = January
    pub month: u32,
    pub year: i32,
}

impl ReportMonth {
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}
