use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::modules::establishments::models::{Establishment, Service, ServicePreference};

/// Commission credited to the employee when the establishment sets none
pub const DEFAULT_COMMISSION_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Display name for a service id that is no longer in the catalog
pub const REMOVED_SERVICE_NAME: &str = "Serviço removido";

/// How one service's price is divided between employee and establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSplit {
    pub price: Decimal,
    pub commission_percent: Decimal,
    /// Credited to the performing employee
    pub employee_revenue: Decimal,
    /// What the establishment keeps
    pub establishment_revenue: Decimal,
}

impl CommissionSplit {
    /// `employee_revenue + establishment_revenue == price` holds exactly
    ///
    /// Prices too large for `price * percent` are scaled down first instead
    /// of overflowing.
    pub fn new(price: Decimal, commission_percent: Decimal) -> Self {
        let employee_revenue = match price.checked_mul(commission_percent) {
            Some(gross) => gross / Decimal::ONE_HUNDRED,
            None => {
                warn!(%price, %commission_percent, "Commission overflowed, scaling price first");
                (price / Decimal::ONE_HUNDRED).saturating_mul(commission_percent)
            }
        };
        Self {
            price,
            commission_percent,
            employee_revenue,
            establishment_revenue: price.saturating_sub(employee_revenue),
        }
    }
}

/// One priced line of a service selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub service_id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub duration: u32,
}

/// Effective totals for a service selection, as frozen on a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub services: Vec<QuoteLine>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_price: Decimal,
    pub total_duration: u32,
}

/// Resolves effective price, duration and commission for an establishment
///
/// Precedence for every value: establishment override, then catalog default,
/// then zero (price, duration) or [`DEFAULT_COMMISSION_PERCENT`]. Lookups on
/// ids missing from the catalog never fail.
pub struct PriceResolver<'a> {
    establishment: Option<&'a Establishment>,
    catalog: HashMap<i64, &'a Service>,
}

impl<'a> PriceResolver<'a> {
    /// `establishment` may be absent (deleted tenant); every override then
    /// falls through to the catalog
    pub fn new(establishment: Option<&'a Establishment>, catalog: &'a [Service]) -> Self {
        Self {
            establishment,
            catalog: catalog.iter().map(|service| (service.id, service)).collect(),
        }
    }

    fn preference(&self, service_id: i64) -> Option<&'a ServicePreference> {
        self.establishment
            .and_then(|establishment| establishment.preference(service_id))
    }

    pub fn service(&self, service_id: i64) -> Option<&'a Service> {
        self.catalog.get(&service_id).copied()
    }

    pub fn service_name(&self, service_id: i64) -> &'a str {
        self.service(service_id)
            .map(|service| service.name.as_str())
            .unwrap_or(REMOVED_SERVICE_NAME)
    }

    pub fn effective_price(&self, service_id: i64) -> Decimal {
        self.preference(service_id)
            .and_then(|prefs| prefs.price)
            .or_else(|| self.service(service_id).and_then(|service| service.price))
            .unwrap_or(Decimal::ZERO)
    }

    /// Minutes
    pub fn effective_duration(&self, service_id: i64) -> u32 {
        self.preference(service_id)
            .and_then(|prefs| prefs.duration)
            .or_else(|| self.service(service_id).and_then(|service| service.duration))
            .unwrap_or(0)
    }

    /// Clamped to [0, 100]
    pub fn commission_percent(&self, service_id: i64) -> Decimal {
        self.preference(service_id)
            .and_then(|prefs| prefs.commission)
            .unwrap_or(DEFAULT_COMMISSION_PERCENT)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    pub fn split(&self, service_id: i64) -> CommissionSplit {
        CommissionSplit::new(
            self.effective_price(service_id),
            self.commission_percent(service_id),
        )
    }

    /// Price a service selection the way a booking does
    ///
    /// Ids missing from the catalog are skipped and repeated ids count once.
    pub fn quote(&self, service_ids: &[i64]) -> Quote {
        let mut lines: Vec<QuoteLine> = Vec::new();
        for &service_id in service_ids {
            let Some(service) = self.service(service_id) else {
                continue;
            };
            if lines.iter().any(|line| line.service_id == service_id) {
                continue;
            }
            lines.push(QuoteLine {
                service_id,
                name: service.name.clone(),
                price: self.effective_price(service_id),
                duration: self.effective_duration(service_id),
            });
        }

        Quote {
            total_price: lines
                .iter()
                .map(|line| line.price)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            total_duration: lines.iter().map(|line| line.duration).sum(),
            services: lines,
        }
    }
}
