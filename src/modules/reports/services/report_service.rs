use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::info;

use crate::core::Result;
use crate::modules::analytics::models::{AnalyticsFilter, PeriodFilter, Snapshot};
use crate::modules::analytics::services::aggregate;
use crate::modules::reports::models::{
    DetailReport, EmployeeDetail, EmployeeReport, EmployeeReportRow, EmployeeReportSummary,
    ReportMonth, ServiceDetail, ALL_PERIODS_LABEL, UNASSIGNED_EMPLOYEE_NAME,
};
use crate::storage::Repositories;

/// Employee financial report over completed appointments
///
/// One row per roster employee, plus an unassigned row when services were
/// performed without a roster employee. Summary revenue is the booked total
/// while the split columns use current prices.
pub fn employee_report(snapshot: &Snapshot, period: Option<ReportMonth>) -> EmployeeReport {
    let period_filter = match period {
        Some(ReportMonth { month, year }) => PeriodFilter::Months {
            year,
            months: BTreeSet::from([month]),
        },
        None => PeriodFilter::Any,
    };
    let aggregation = aggregate(snapshot, &AnalyticsFilter::completed_in(period_filter));

    let mut report: Vec<EmployeeReportRow> = aggregation
        .employees
        .values()
        .map(|tally| EmployeeReportRow {
            employee_id: Some(tally.id),
            employee_name: tally.name.clone(),
            appointment_count: tally.appointments,
            total_revenue: tally.revenue,
            employee_revenue: tally.commission,
            establishment_revenue: tally.establishment_revenue(),
        })
        .collect();

    let unassigned = &aggregation.unassigned;
    if !unassigned.revenue.is_zero() || unassigned.appointments > 0 {
        report.push(EmployeeReportRow {
            employee_id: None,
            employee_name: UNASSIGNED_EMPLOYEE_NAME.to_string(),
            appointment_count: unassigned.appointments,
            total_revenue: unassigned.revenue,
            employee_revenue: unassigned.commission,
            establishment_revenue: unassigned.establishment,
        });
    }

    let summary = EmployeeReportSummary {
        total_appointments: aggregation.totals.appointments,
        total_revenue: aggregation.totals.booked_revenue,
        total_employee_revenue: report
            .iter()
            .map(|row| row.employee_revenue)
            .fold(Decimal::ZERO, Decimal::saturating_add),
        total_establishment_revenue: report
            .iter()
            .map(|row| row.establishment_revenue)
            .fold(Decimal::ZERO, Decimal::saturating_add),
        period: period
            .map(|month| month.label())
            .unwrap_or_else(|| ALL_PERIODS_LABEL.to_string()),
    };

    EmployeeReport { report, summary }
}

/// Per-service breakdown for each employee over `months` of `year`
pub fn detail_report(snapshot: &Snapshot, months: &BTreeSet<u32>, year: i32) -> DetailReport {
    let filter = AnalyticsFilter::completed_in(PeriodFilter::Months {
        year,
        months: months.clone(),
    });
    let aggregation = aggregate(snapshot, &filter);

    let report = aggregation
        .employees
        .values()
        .filter(|tally| tally.services > 0)
        .map(|tally| {
            let mut services: Vec<ServiceDetail> = tally
                .by_service
                .values()
                .map(|service| ServiceDetail {
                    service_id: service.id,
                    service_name: service.name.clone(),
                    count: service.count,
                    revenue: service.revenue,
                    commission: service.commission,
                })
                .collect();
            services.sort_by(|a, b| b.count.cmp(&a.count));

            EmployeeDetail {
                employee_id: tally.id,
                employee_name: tally.name.clone(),
                services,
                total_count: tally.services,
                total_revenue: tally.revenue,
                total_commission: tally.commission,
            }
        })
        .collect();

    DetailReport {
        report,
        selected_months: months.iter().copied().collect(),
        year,
    }
}

/// Loads snapshots and renders the employee reports
pub struct ReportService {
    repos: Repositories,
}

impl ReportService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    pub async fn employee_report(
        &self,
        establishment_id: i64,
        period: Option<ReportMonth>,
    ) -> Result<EmployeeReport> {
        let snapshot = Snapshot::load(&self.repos, establishment_id).await?;
        let report = employee_report(&snapshot, period);

        info!(
            establishment_id,
            period = %report.summary.period,
            rows = report.report.len(),
            "Employee report generated"
        );

        Ok(report)
    }

    pub async fn detail_report(
        &self,
        establishment_id: i64,
        months: &BTreeSet<u32>,
        year: i32,
    ) -> Result<DetailReport> {
        let snapshot = Snapshot::load(&self.repos, establishment_id).await?;
        let report = detail_report(&snapshot, months, year);

        info!(
            establishment_id,
            ?months,
            year,
            employees = report.report.len(),
            "Detail report generated"
        );

        Ok(report)
    }
}
