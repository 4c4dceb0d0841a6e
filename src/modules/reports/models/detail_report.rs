use rust_decimal::Decimal;
use serde::Serialize;

/// Per-employee, per-service breakdown over a set of months
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailReport {
    /// Only employees who performed at least one service
    pub report: Vec<EmployeeDetail>,
    pub selected_months: Vec<u32>,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    pub employee_id: i64,
    pub employee_name: String,
    /// Most performed first
    pub services: Vec<ServiceDetail>,
    pub total_count: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    pub service_id: i64,
    pub service_name: String,
    pub count: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
}
