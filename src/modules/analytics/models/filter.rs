// Multi-dimensional analytics filter.
//
// `AnalyticsQuery` is the raw query string; `AnalyticsFilter` is the typed
// form the engine works with. Conversion is permissive: anything malformed is
// dropped (and logged) instead of rejecting the request, and a list that ends
// up empty imposes no constraint.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use crate::modules::appointments::models::{Appointment, AppointmentStatus};

/// Raw analytics query parameters, all optional comma-separated lists
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// e.g. `1,3` (1 = January)
    pub months: Option<String>,
    pub year: Option<String>,
    pub statuses: Option<String>,
    /// e.g. `0,6` (0 = Sunday)
    pub weekdays: Option<String>,
    pub employees: Option<String>,
    pub services: Option<String>,
}

/// Calendar period constraint
///
/// `months` + `year` and `year` alone are exclusive branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PeriodFilter {
    #[default]
    Any,
    Year(i32),
    Months { year: i32, months: BTreeSet<u32> },
}

impl PeriodFilter {
    /// Pick the branch from whatever survived parsing
    pub fn from_parts(year: Option<i32>, months: Option<BTreeSet<u32>>) -> Self {
        match (year, months) {
            (Some(year), Some(months)) => PeriodFilter::Months { year, months },
            (Some(year), None) => PeriodFilter::Year(year),
            // Months without a year carry no meaning
            (None, _) => PeriodFilter::Any,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            PeriodFilter::Any => true,
            PeriodFilter::Year(year) => date.year() == *year,
            PeriodFilter::Months { year, months } => {
                date.year() == *year && months.contains(&date.month())
            }
        }
    }
}

/// Typed filter; `None` / `Any` fields impose no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsFilter {
    /// Inclusive
    pub start_date: Option<NaiveDate>,
    /// Inclusive
    pub end_date: Option<NaiveDate>,
    pub period: PeriodFilter,
    pub statuses: Option<BTreeSet<AppointmentStatus>>,
    /// 0 = Sunday
    pub weekdays: Option<BTreeSet<u32>>,
    /// Applied per assignment
    pub employees: Option<BTreeSet<i64>>,
    /// Applied per assignment
    pub services: Option<BTreeSet<i64>>,
}

impl AnalyticsFilter {
    /// Completed appointments within an optional period
    pub fn completed_in(period: PeriodFilter) -> Self {
        Self {
            period,
            statuses: Some(BTreeSet::from([AppointmentStatus::Completed])),
            ..Self::default()
        }
    }

    /// Appointment-level decision (dates, period, status, weekday)
    pub fn matches_appointment(&self, appointment: &Appointment) -> bool {
        if self.start_date.is_some_and(|start| appointment.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| appointment.date > end) {
            return false;
        }
        if !self.period.contains(appointment.date) {
            return false;
        }
        if let Some(statuses) = &self.statuses {
            if !statuses.contains(&appointment.status) {
                return false;
            }
        }
        if let Some(weekdays) = &self.weekdays {
            if !weekdays.contains(&appointment.weekday()) {
                return false;
            }
        }
        true
    }

    /// Assignment-level decision; `employee_id` is `None` for unassigned
    /// services, which never pass an employee filter
    pub fn matches_assignment(&self, service_id: i64, employee_id: Option<i64>) -> bool {
        if let Some(employees) = &self.employees {
            match employee_id {
                Some(id) if employees.contains(&id) => {}
                _ => return false,
            }
        }
        if let Some(services) = &self.services {
            if !services.contains(&service_id) {
                return false;
            }
        }
        true
    }
}

impl From<&AnalyticsQuery> for AnalyticsFilter {
    fn from(query: &AnalyticsQuery) -> Self {
        let year = parse_scalar::<i32>("year", query.year.as_deref());
        let months = parse_list("months", query.months.as_deref(), |m: &u32| {
            (1..=12).contains(m)
        });

        Self {
            start_date: parse_date("startDate", query.start_date.as_deref()),
            end_date: parse_date("endDate", query.end_date.as_deref()),
            period: PeriodFilter::from_parts(year, months),
            statuses: parse_list("statuses", query.statuses.as_deref(), |_| true),
            weekdays: parse_list("weekdays", query.weekdays.as_deref(), |d: &u32| *d <= 6),
            employees: parse_list("employees", query.employees.as_deref(), |_| true),
            services: parse_list("services", query.services.as_deref(), |_| true),
        }
    }
}

pub(crate) fn parse_date(field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(field, value = raw, "Ignoring unparseable date filter");
            None
        }
    }
}

pub(crate) fn parse_scalar<T>(field: &str, raw: Option<&str>) -> Option<T>
where
    T: FromStr,
{
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field, value = raw, "Ignoring unparseable filter value");
            None
        }
    }
}

/// Comma-separated set; bad or out-of-range entries are dropped and an empty
/// result means "no filter"
pub(crate) fn parse_list<T>(
    field: &str,
    raw: Option<&str>,
    accept: impl Fn(&T) -> bool,
) -> Option<BTreeSet<T>>
where
    T: FromStr + Ord,
    T::Err: Display,
{
    let values: BTreeSet<T> = parse_sequence(field, raw, accept).into_iter().collect();
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Comma-separated values in input order, repeats kept
pub(crate) fn parse_sequence<T>(
    field: &str,
    raw: Option<&str>,
    accept: impl Fn(&T) -> bool,
) -> Vec<T>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return Vec::new();
    };

    let mut values = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        match item.parse::<T>() {
            Ok(value) if accept(&value) => values.push(value),
            Ok(_) => warn!(field, value = item, "Ignoring out-of-range filter entry"),
            Err(e) => warn!(field, value = item, "Ignoring filter entry: {}", e),
        }
    }
    values
}
