use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::traits::Identified;

/// Catalog-level bookable service with default price and duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Identified for Service {
    fn id(&self) -> i64 {
        self.id
    }
}
