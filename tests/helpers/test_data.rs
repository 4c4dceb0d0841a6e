// Test Data Factory
//
// One establishment with a small catalog and a two-person roster, plus
// builders for appointments against it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use salon_analytics::analytics::models::Snapshot;
use salon_analytics::appointments::models::{Appointment, AppointmentStatus, Assignment};
use salon_analytics::establishments::models::{
    Employee, Establishment, Service, ServicePreference,
};
use salon_analytics::Repositories;

pub const ESTABLISHMENT_ID: i64 = 1;
pub const OTHER_ESTABLISHMENT_ID: i64 = 2;

/// Coloração: catalog 90, establishment override 100 @ 40 %
pub const SERVICE_COLOR: i64 = 1;
/// Escova: catalog 50, default commission
pub const SERVICE_BLOWOUT: i64 = 2;
/// Manicure: catalog 30, not offered by the establishment
pub const SERVICE_NAILS: i64 = 3;

pub const EMP_ANA: i64 = 10;
pub const EMP_BIA: i64 = 11;
/// Employee of another establishment
pub const EMP_OTHER: i64 = 20;

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn establishment() -> Establishment {
        let mut prefs = BTreeMap::new();
        prefs.insert(
            SERVICE_COLOR,
            ServicePreference {
                price: Some(dec!(100)),
                duration: Some(75),
                commission: Some(dec!(40)),
            },
        );
        Establishment {
            id: ESTABLISHMENT_ID,
            name: "Studio Bela".to_string(),
            services: vec![SERVICE_COLOR, SERVICE_BLOWOUT],
            service_preferences: prefs,
        }
    }

    pub fn other_establishment() -> Establishment {
        Establishment {
            id: OTHER_ESTABLISHMENT_ID,
            name: "Espaço Flor".to_string(),
            services: vec![SERVICE_NAILS],
            service_preferences: BTreeMap::new(),
        }
    }

    pub fn catalog() -> Vec<Service> {
        [
            (SERVICE_COLOR, "Coloração", dec!(90), 60),
            (SERVICE_BLOWOUT, "Escova", dec!(50), 30),
            (SERVICE_NAILS, "Manicure", dec!(30), 40),
        ]
        .into_iter()
        .map(|(id, name, price, duration)| Service {
            id,
            name: name.to_string(),
            price: Some(price),
            duration: Some(duration),
            category_id: None,
        })
        .collect()
    }

    pub fn employees() -> Vec<Employee> {
        vec![
            Employee {
                id: EMP_ANA,
                establishment_id: ESTABLISHMENT_ID,
                name: "Ana".to_string(),
                services: vec![SERVICE_COLOR, SERVICE_BLOWOUT],
            },
            Employee {
                id: EMP_BIA,
                establishment_id: ESTABLISHMENT_ID,
                name: "Bia".to_string(),
                services: vec![SERVICE_BLOWOUT],
            },
            Employee {
                id: EMP_OTHER,
                establishment_id: OTHER_ESTABLISHMENT_ID,
                name: "Carla".to_string(),
                services: vec![SERVICE_NAILS],
            },
        ]
    }

    pub fn appointment(
        id: i64,
        date: &str,
        status: AppointmentStatus,
        services: Vec<i64>,
        assignments: Vec<Assignment>,
        total_price: Decimal,
    ) -> Appointment {
        Appointment {
            id,
            establishment_id: ESTABLISHMENT_ID,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
            time: "10:00".to_string(),
            status,
            services,
            assignments,
            total_price,
            total_duration: 0,
        }
    }

    /// Completed Monday appointment: Coloração and Escova, both by Ana
    pub fn worked_example() -> Appointment {
        Self::appointment(
            1,
            "2025-03-10",
            AppointmentStatus::Completed,
            vec![SERVICE_COLOR, SERVICE_BLOWOUT],
            vec![
                Assignment::new(SERVICE_COLOR, EMP_ANA),
                Assignment::new(SERVICE_BLOWOUT, EMP_ANA),
            ],
            dec!(150),
        )
    }

    /// A small but varied history for the main establishment
    pub fn history() -> Vec<Appointment> {
        vec![
            Self::worked_example(),
            // Tuesday, Bia on Escova, Coloração left unassigned
            Self::appointment(
                2,
                "2025-03-11",
                AppointmentStatus::Completed,
                vec![SERVICE_COLOR, SERVICE_BLOWOUT],
                vec![Assignment::new(SERVICE_BLOWOUT, EMP_BIA)],
                dec!(150),
            ),
            // Nobody assigned at all
            Self::appointment(
                3,
                "2025-04-05",
                AppointmentStatus::Completed,
                vec![SERVICE_BLOWOUT],
                vec![],
                dec!(50),
            ),
            Self::appointment(
                4,
                "2025-04-07",
                AppointmentStatus::Cancelled,
                vec![SERVICE_COLOR],
                vec![Assignment::new(SERVICE_COLOR, EMP_ANA)],
                dec!(100),
            ),
            Self::appointment(
                5,
                "2025-04-08",
                AppointmentStatus::Pending,
                vec![SERVICE_BLOWOUT],
                vec![],
                dec!(50),
            ),
        ]
    }

    /// Appointment belonging to the other establishment
    pub fn foreign_appointment() -> Appointment {
        Appointment {
            establishment_id: OTHER_ESTABLISHMENT_ID,
            ..Self::appointment(
                100,
                "2025-03-10",
                AppointmentStatus::Completed,
                vec![SERVICE_NAILS],
                vec![Assignment::new(SERVICE_NAILS, EMP_OTHER)],
                dec!(30),
            )
        }
    }

    pub fn snapshot(appointments: Vec<Appointment>) -> Snapshot {
        Snapshot {
            establishment_id: ESTABLISHMENT_ID,
            establishment: Some(Self::establishment()),
            catalog: Self::catalog(),
            employees: Self::employees()
                .into_iter()
                .filter(|employee| employee.establishment_id == ESTABLISHMENT_ID)
                .collect(),
            appointments,
        }
    }

    pub fn repositories(appointments: Vec<Appointment>) -> Repositories {
        Repositories::in_memory(
            vec![Self::establishment(), Self::other_establishment()],
            Self::catalog(),
            Self::employees(),
            appointments,
        )
    }
}
