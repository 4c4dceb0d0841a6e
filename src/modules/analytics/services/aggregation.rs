// Single-pass aggregation over a snapshot.
//
// Only completed appointments reach the tallies. Appointment-level counters
// (summary count, month and weekday buckets with their booked revenue) move
// once per appointment; assignment-level tallies move once per surviving
// assignment or unassigned service, priced by the resolver. Money sums
// saturate instead of overflowing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::modules::analytics::models::{AnalyticsFilter, Snapshot};
use crate::modules::appointments::models::Appointment;
use crate::modules::establishments::models::Employee;
use crate::modules::establishments::services::{CommissionSplit, PriceResolver};

/// Whole-establishment totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Completed appointments
    pub appointments: u64,
    pub revenue: Decimal,
    pub commission: Decimal,
    pub establishment: Decimal,
    /// Sum of the prices frozen on the appointments at booking time
    pub booked_revenue: Decimal,
}

impl Totals {
    fn add(&mut self, split: &CommissionSplit) {
        self.revenue = self.revenue.saturating_add(split.price);
        self.commission = self.commission.saturating_add(split.employee_revenue);
        self.establishment = self.establishment.saturating_add(split.establishment_revenue);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTally {
    pub id: i64,
    pub name: String,
    pub count: u64,
    pub revenue: Decimal,
    pub commission: Decimal,
}

impl ServiceTally {
    fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            count: 0,
            revenue: Decimal::ZERO,
            commission: Decimal::ZERO,
        }
    }

    fn add(&mut self, split: &CommissionSplit) {
        self.count += 1;
        self.revenue = self.revenue.saturating_add(split.price);
        self.commission = self.commission.saturating_add(split.employee_revenue);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTally {
    pub id: i64,
    pub name: String,
    /// Distinct completed appointments the employee worked on
    pub appointments: u64,
    /// Assignments performed
    pub services: u64,
    pub revenue: Decimal,
    pub commission: Decimal,
    /// Same figures broken down per service
    pub by_service: BTreeMap<i64, ServiceTally>,
}

impl EmployeeTally {
    fn new(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            appointments: 0,
            services: 0,
            revenue: Decimal::ZERO,
            commission: Decimal::ZERO,
            by_service: BTreeMap::new(),
        }
    }

    pub fn establishment_revenue(&self) -> Decimal {
        self.revenue.saturating_sub(self.commission)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthTally {
    pub appointments: u64,
    /// Booked revenue
    pub revenue: Decimal,
    pub commission: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekdayTally {
    pub appointments: u64,
    /// Booked revenue
    pub revenue: Decimal,
}

/// Services performed without a roster employee
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnassignedTally {
    /// Completed appointments that had no assignment at all
    pub appointments: u64,
    pub services: u64,
    pub revenue: Decimal,
    pub commission: Decimal,
    pub establishment: Decimal,
}

impl UnassignedTally {
    fn add(&mut self, split: &CommissionSplit) {
        self.services += 1;
        self.revenue = self.revenue.saturating_add(split.price);
        self.commission = self.commission.saturating_add(split.employee_revenue);
        self.establishment = self.establishment.saturating_add(split.establishment_revenue);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub totals: Totals,
    /// Every roster employee, active or not, keyed by id
    pub employees: BTreeMap<i64, EmployeeTally>,
    /// Only services that were actually performed
    pub services: BTreeMap<i64, ServiceTally>,
    /// Keyed by `YYYY-MM`
    pub months: BTreeMap<String, MonthTally>,
    /// Sunday first
    pub weekdays: [WeekdayTally; 7],
    pub unassigned: UnassignedTally,
}

impl Aggregation {
    /// Empty tallies with one zeroed entry per roster employee
    pub fn seeded(roster: &[Employee]) -> Self {
        Self {
            totals: Totals::default(),
            employees: roster
                .iter()
                .map(|employee| (employee.id, EmployeeTally::new(employee)))
                .collect(),
            services: BTreeMap::new(),
            months: BTreeMap::new(),
            weekdays: Default::default(),
            unassigned: UnassignedTally::default(),
        }
    }

    fn record(
        &mut self,
        appointment: &Appointment,
        resolver: &PriceResolver<'_>,
        filter: &AnalyticsFilter,
    ) {
        if !appointment.is_completed() {
            return;
        }

        let month_key = appointment.month_key();

        // Appointment-level counters, once per appointment
        self.totals.appointments += 1;
        self.totals.booked_revenue = self
            .totals
            .booked_revenue
            .saturating_add(appointment.total_price);

        let weekday = &mut self.weekdays[appointment.weekday() as usize];
        weekday.appointments += 1;
        weekday.revenue = weekday.revenue.saturating_add(appointment.total_price);

        let month = self.months.entry(month_key.clone()).or_default();
        month.appointments += 1;
        month.revenue = month.revenue.saturating_add(appointment.total_price);

        for employee_id in appointment.distinct_employees() {
            if let Some(tally) = self.employees.get_mut(&employee_id) {
                tally.appointments += 1;
            }
        }

        // Assignment-level tallies
        for assignment in &appointment.assignments {
            if !filter.matches_assignment(assignment.service_id, assignment.employee_id) {
                continue;
            }

            let split = resolver.split(assignment.service_id);
            self.credit(&month_key, assignment.service_id, &split, resolver);

            let roster_entry = assignment
                .employee_id
                .and_then(|employee_id| self.employees.get_mut(&employee_id));
            match roster_entry {
                Some(tally) => {
                    tally.services += 1;
                    tally.revenue = tally.revenue.saturating_add(split.price);
                    tally.commission = tally.commission.saturating_add(split.employee_revenue);
                    tally
                        .by_service
                        .entry(assignment.service_id)
                        .or_insert_with(|| {
                            ServiceTally::new(
                                assignment.service_id,
                                resolver.service_name(assignment.service_id),
                            )
                        })
                        .add(&split);
                }
                // Null or deleted employee
                None => self.unassigned.add(&split),
            }
        }

        let mut unassigned_hit = false;
        for service_id in appointment.unassigned_services() {
            if !filter.matches_assignment(service_id, None) {
                continue;
            }
            unassigned_hit = true;

            let split = resolver.split(service_id);
            self.credit(&month_key, service_id, &split, resolver);
            self.unassigned.add(&split);
        }

        if appointment.assignments.is_empty() && unassigned_hit {
            self.unassigned.appointments += 1;
        }
    }

    /// Establishment-wide, per-service and monthly commission credit
    fn credit(
        &mut self,
        month_key: &str,
        service_id: i64,
        split: &CommissionSplit,
        resolver: &PriceResolver<'_>,
    ) {
        self.totals.add(split);

        self.services
            .entry(service_id)
            .or_insert_with(|| ServiceTally::new(service_id, resolver.service_name(service_id)))
            .add(split);

        if let Some(month) = self.months.get_mut(month_key) {
            month.commission = month.commission.saturating_add(split.employee_revenue);
        }
    }
}

/// Fold the snapshot's appointments that pass `filter` into tallies
pub fn aggregate(snapshot: &Snapshot, filter: &AnalyticsFilter) -> Aggregation {
    let resolver = PriceResolver::new(snapshot.establishment.as_ref(), &snapshot.catalog);

    snapshot
        .appointments
        .iter()
        .filter(|appointment| filter.matches_appointment(appointment))
        .fold(Aggregation::seeded(&snapshot.employees), |mut acc, appointment| {
            acc.record(appointment, &resolver, filter);
            acc
        })
}
