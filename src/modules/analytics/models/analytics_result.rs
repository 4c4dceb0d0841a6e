use rust_decimal::Decimal;
use serde::Serialize;

/// Localized weekday labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Establishment analytics payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    pub summary: AnalyticsSummary,
    pub employee_ranking: Vec<EmployeeRankingEntry>,
    pub service_ranking: Vec<ServiceRankingEntry>,
    /// Ascending by month
    pub monthly_data: Vec<MonthlyEntry>,
    /// Always 7 entries, Sunday to Saturday
    pub weekday_data: Vec<WeekdayEntry>,
    /// Revenue not attributed to any roster employee
    pub unassigned: UnassignedSummary,
    /// Establishment roster, for filter pickers
    pub employees: Vec<NamedRef>,
    /// Services the establishment offers, for filter pickers
    pub services: Vec<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Completed appointments
    pub total_appointments: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_commission: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_establishment: Decimal,
    /// Average revenue per completed appointment
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ticket_medio: Decimal,
    pub top_service: Option<String>,
    pub top_employee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRankingEntry {
    pub id: i64,
    pub name: String,
    /// Distinct appointments
    pub appointments: u64,
    /// Assignments performed
    pub services: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRankingEntry {
    pub id: i64,
    pub name: String,
    pub count: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEntry {
    /// `YYYY-MM`
    pub month: String,
    pub appointments: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayEntry {
    pub day: String,
    /// 0 = Sunday
    pub weekday: u32,
    pub appointments: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedSummary {
    /// Completed appointments with no assignment at all
    pub appointments: u64,
    pub services: u64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub commission: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub establishment: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}
