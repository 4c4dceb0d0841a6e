// Appointment record as written by the booking flow.
//
// The analytics layer only reads these. `total_price` and `total_duration`
// are frozen at booking time and are never recomputed here.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::Identified;

/// Appointment status lifecycle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked by the customer, awaiting confirmation
    Pending,
    /// Accepted by the establishment
    Confirmed,
    Cancelled,
    /// Service delivered; the only status that carries revenue
    Completed,
    NoShow,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            "no_show" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!("Invalid appointment status: {}", s)),
        }
    }
}

/// Which employee performed which service inside an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub service_id: i64,
    /// `None` when the slot was booked without choosing staff
    #[serde(default)]
    pub employee_id: Option<i64>,
}

impl Assignment {
    pub fn new(service_id: i64, employee_id: i64) -> Self {
        Self {
            service_id,
            employee_id: Some(employee_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub establishment_id: i64,
    /// Local calendar date, no time zone
    pub date: NaiveDate,
    /// Clock time as `HH:MM`
    #[serde(default)]
    pub time: String,
    pub status: AppointmentStatus,
    /// Services nominally included, assigned or not
    #[serde(default)]
    pub services: Vec<i64>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub total_price: Decimal,
    #[serde(default)]
    pub total_duration: u32,
}

impl Appointment {
    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }

    /// Day of week, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }

    /// `YYYY-MM` bucket key; lexicographic order is chronological
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Distinct employees referenced by the assignments
    pub fn distinct_employees(&self) -> BTreeSet<i64> {
        self.assignments
            .iter()
            .filter_map(|assignment| assignment.employee_id)
            .collect()
    }

    /// Services listed on the appointment that no assignment covers
    ///
    /// With zero assignments this is the whole `services` list.
    pub fn unassigned_services(&self) -> impl Iterator<Item = i64> + '_ {
        self.services.iter().copied().filter(move |service_id| {
            !self
                .assignments
                .iter()
                .any(|assignment| assignment.service_id == *service_id)
        })
    }
}

impl Identified for Appointment {
    fn id(&self) -> i64 {
        self.id
    }
}
