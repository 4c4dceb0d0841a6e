use serde::{Deserialize, Serialize};

use crate::core::traits::Identified;

/// Staff member of an establishment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub establishment_id: i64,
    pub name: String,
    /// Service ids the employee is qualified to perform
    #[serde(default)]
    pub services: Vec<i64>,
}

impl Identified for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}
