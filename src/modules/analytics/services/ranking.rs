use rust_decimal::Decimal;

use crate::modules::analytics::models::{
    AnalyticsResult, AnalyticsSummary, EmployeeRankingEntry, MonthlyEntry, NamedRef,
    ServiceRankingEntry, Snapshot, UnassignedSummary, WeekdayEntry, WEEKDAY_LABELS,
};
use crate::modules::analytics::services::aggregation::Aggregation;

/// Revenue per completed appointment, zero when there are none
pub fn ticket_medio(revenue: Decimal, appointments: u64) -> Decimal {
    if appointments == 0 {
        Decimal::ZERO
    } else {
        revenue / Decimal::from(appointments)
    }
}

/// Employees with at least one service, by commission descending
///
/// `Vec::sort_by` is stable, so ties keep roster id order.
pub fn employee_ranking(aggregation: &Aggregation) -> Vec<EmployeeRankingEntry> {
    let mut ranking: Vec<EmployeeRankingEntry> = aggregation
        .employees
        .values()
        .filter(|tally| tally.services > 0)
        .map(|tally| EmployeeRankingEntry {
            id: tally.id,
            name: tally.name.clone(),
            appointments: tally.appointments,
            services: tally.services,
            revenue: tally.revenue,
            commission: tally.commission,
        })
        .collect();
    ranking.sort_by(|a, b| b.commission.cmp(&a.commission));
    ranking
}

/// Services by times performed descending, ties in service id order
pub fn service_ranking(aggregation: &Aggregation) -> Vec<ServiceRankingEntry> {
    let mut ranking: Vec<ServiceRankingEntry> = aggregation
        .services
        .values()
        .map(|tally| ServiceRankingEntry {
            id: tally.id,
            name: tally.name.clone(),
            count: tally.count,
            revenue: tally.revenue,
            commission: tally.commission,
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

pub fn monthly_data(aggregation: &Aggregation) -> Vec<MonthlyEntry> {
    // BTreeMap iteration is already chronological for `YYYY-MM` keys
    aggregation
        .months
        .iter()
        .map(|(month, tally)| MonthlyEntry {
            month: month.clone(),
            appointments: tally.appointments,
            revenue: tally.revenue,
            commission: tally.commission,
        })
        .collect()
}

pub fn weekday_data(aggregation: &Aggregation) -> Vec<WeekdayEntry> {
    aggregation
        .weekdays
        .iter()
        .zip(WEEKDAY_LABELS)
        .zip(0u32..)
        .map(|((tally, label), weekday)| WeekdayEntry {
            day: label.to_string(),
            weekday,
            appointments: tally.appointments,
            revenue: tally.revenue,
        })
        .collect()
}

/// Shape tallies into the external payload
pub fn build_result(aggregation: &Aggregation, snapshot: &Snapshot) -> AnalyticsResult {
    let employee_ranking = employee_ranking(aggregation);
    let service_ranking = service_ranking(aggregation);
    let totals = &aggregation.totals;

    let summary = AnalyticsSummary {
        total_appointments: totals.appointments,
        total_revenue: totals.revenue,
        total_commission: totals.commission,
        total_establishment: totals.establishment,
        ticket_medio: ticket_medio(totals.revenue, totals.appointments),
        top_service: service_ranking.first().map(|entry| entry.name.clone()),
        top_employee: employee_ranking.first().map(|entry| entry.name.clone()),
    };

    let unassigned = &aggregation.unassigned;
    let offered = snapshot
        .catalog
        .iter()
        .filter(|service| {
            snapshot
                .establishment
                .as_ref()
                .is_some_and(|establishment| establishment.offers(service.id))
        })
        .map(|service| NamedRef {
            id: service.id,
            name: service.name.clone(),
        })
        .collect();

    AnalyticsResult {
        summary,
        employee_ranking,
        service_ranking,
        monthly_data: monthly_data(aggregation),
        weekday_data: weekday_data(aggregation),
        unassigned: UnassignedSummary {
            appointments: unassigned.appointments,
            services: unassigned.services,
            revenue: unassigned.revenue,
            commission: unassigned.commission,
            establishment: unassigned.establishment,
        },
        employees: snapshot
            .employees
            .iter()
            .map(|employee| NamedRef {
                id: employee.id,
                name: employee.name.clone(),
            })
            .collect(),
        services: offered,
    }
}
