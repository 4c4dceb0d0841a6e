use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::Identified;

/// Per-establishment override of a catalog service
///
/// Every field is optional; an absent field falls back to the catalog value
/// (price, duration) or to the default commission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicePreference {
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    /// Percentage of the price credited to the performing employee
    #[serde(default)]
    pub commission: Option<Decimal>,
}

/// A business tenant offering services (e.g. a salon)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Catalog service ids offered by this establishment
    #[serde(default)]
    pub services: Vec<i64>,
    /// Overrides keyed by service id
    #[serde(default)]
    pub service_preferences: BTreeMap<i64, ServicePreference>,
}

impl Establishment {
    pub fn offers(&self, service_id: i64) -> bool {
        self.services.contains(&service_id)
    }

    pub fn preference(&self, service_id: i64) -> Option<&ServicePreference> {
        self.service_preferences.get(&service_id)
    }
}

impl Identified for Establishment {
    fn id(&self) -> i64 {
        self.id
    }
}
