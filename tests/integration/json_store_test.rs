//! Flat-file storage backend end to end
//!
//! Tables are written the way the booking application writes them: camelCase
//! records, preferences keyed by stringified service id.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::path::Path;

use actix_web::{test, App};
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use salon_analytics::analytics::models::AnalyticsFilter;
use salon_analytics::analytics::AnalyticsService;
use salon_analytics::core::AppError;
use salon_analytics::Repositories;

fn write_table(dir: &Path, table: &str, rows: Value) {
    std::fs::write(dir.join(format!("{}.json", table)), rows.to_string()).unwrap();
}

fn seed(dir: &Path) {
    write_table(
        dir,
        "establishments",
        json!([{
            "id": 1,
            "name": "Studio Bela",
            "services": [1, 2],
            "servicePreferences": {
                "1": { "price": 100, "commission": 40 }
            }
        }]),
    );
    write_table(
        dir,
        "services",
        json!([
            { "id": 1, "name": "Coloração", "price": 90, "duration": 60, "categoryId": 3 },
            { "id": 2, "name": "Escova", "price": 50, "duration": 30 }
        ]),
    );
    write_table(
        dir,
        "employees",
        json!([
            { "id": 10, "establishmentId": 1, "name": "Ana", "services": [1, 2] },
            { "id": 20, "establishmentId": 2, "name": "Carla" }
        ]),
    );
    write_table(
        dir,
        "appointments",
        json!([
            {
                "id": 1,
                "establishmentId": 1,
                "date": "2025-03-10",
                "time": "10:00",
                "status": "completed",
                "services": [1, 2],
                "assignments": [
                    { "serviceId": 1, "employeeId": 10 },
                    { "serviceId": 2, "employeeId": 10 }
                ],
                "totalPrice": 150,
                "totalDuration": 90
            },
            {
                "id": 2,
                "establishmentId": 1,
                "date": "2025-03-12",
                "time": "14:30",
                "status": "pending",
                "services": [2],
                "totalPrice": 50
            }
        ]),
    );
}

#[tokio::test]
async fn test_worked_example_from_json_files() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    let service = AnalyticsService::new(Repositories::json(dir.path()));

    let result = service
        .compute_analytics(1, &AnalyticsFilter::default())
        .await
        .unwrap();

    assert_eq!(result.summary.total_appointments, 1);
    assert_eq!(result.summary.total_revenue, dec!(150));
    assert_eq!(result.summary.total_commission, dec!(65));
    assert_eq!(result.summary.total_establishment, dec!(85));
    assert_eq!(result.employees.len(), 1);
    assert_eq!(result.weekday_data[1].appointments, 1);
}

#[tokio::test]
async fn test_missing_tables_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = AnalyticsService::new(Repositories::json(dir.path()));

    let result = service
        .compute_analytics(1, &AnalyticsFilter::default())
        .await
        .unwrap();

    assert_eq!(result.summary.total_appointments, 0);
    assert!(result.employee_ranking.is_empty());
    assert_eq!(result.weekday_data.len(), 7);
}

#[tokio::test]
async fn test_corrupt_table_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    std::fs::write(dir.path().join("appointments.json"), "[{ \"id\": ").unwrap();
    let service = AnalyticsService::new(Repositories::json(dir.path()));

    let err = service
        .compute_analytics(1, &AnalyticsFilter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Storage(_)));
}

#[actix_web::test]
async fn test_corrupt_table_surfaces_as_503() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());
    std::fs::write(dir.path().join("services.json"), "not json").unwrap();

    let app = test::init_service(
        App::new().configure(app_routes(Repositories::json(dir.path()))),
    )
    .await;
    let req = test::TestRequest::get().uri("/api/analytics/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 503);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body, 503);
}

#[actix_web::test]
async fn test_readiness_follows_store_health() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path());

    let app = test::init_service(
        App::new().configure(app_routes(Repositories::json(dir.path()))),
    )
    .await;
    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}
