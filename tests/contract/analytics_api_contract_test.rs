//! Contract tests for the HTTP API
//!
//! Real server on a random port; checks field names and shapes clients
//! depend on rather than the numbers behind them.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::Value;

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .unwrap_or_else(|| panic!("Not an object: {}", value))
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[actix_web::test]
async fn test_analytics_response_contract() {
    let srv = spawn_test_server(TestDataFactory::repositories(TestDataFactory::history()));

    let mut response = srv.get("/api/analytics/1").send().await.unwrap();
    assert_ok(&response);
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await.unwrap();
    let data = envelope_data(&body);

    assert_eq!(
        keys(data),
        vec![
            "employeeRanking",
            "employees",
            "monthlyData",
            "serviceRanking",
            "services",
            "summary",
            "unassigned",
            "weekdayData",
        ]
    );
    assert_eq!(
        keys(&data["summary"]),
        vec![
            "ticketMedio",
            "topEmployee",
            "topService",
            "totalAppointments",
            "totalCommission",
            "totalEstablishment",
            "totalRevenue",
        ]
    );
    assert_eq!(
        keys(&data["employeeRanking"][0]),
        vec!["appointments", "commission", "id", "name", "revenue", "services"]
    );
    assert_eq!(
        keys(&data["serviceRanking"][0]),
        vec!["commission", "count", "id", "name", "revenue"]
    );
    assert_eq!(
        keys(&data["monthlyData"][0]),
        vec!["appointments", "commission", "month", "revenue"]
    );
    assert_eq!(
        keys(&data["weekdayData"][0]),
        vec!["appointments", "day", "revenue", "weekday"]
    );
    assert_eq!(keys(&data["employees"][0]), vec!["id", "name"]);

    // Money is a JSON number, not a string
    assert!(data["summary"]["totalRevenue"].is_number());
}

#[actix_web::test]
async fn test_employee_report_contract() {
    let srv = spawn_test_server(TestDataFactory::repositories(TestDataFactory::history()));

    let mut response = srv.get("/api/employees/1/report").send().await.unwrap();
    assert_ok(&response);

    let body: Value = response.json().await.unwrap();
    let data = envelope_data(&body);

    assert_eq!(keys(data), vec!["report", "summary"]);
    assert_eq!(
        keys(&data["report"][0]),
        vec![
            "appointmentCount",
            "employeeId",
            "employeeName",
            "employeeRevenue",
            "establishmentRevenue",
            "totalRevenue",
        ]
    );
    assert_eq!(
        keys(&data["summary"]),
        vec![
            "period",
            "totalAppointments",
            "totalEmployeeRevenue",
            "totalEstablishmentRevenue",
            "totalRevenue",
        ]
    );
}

#[actix_web::test]
async fn test_detail_report_contract() {
    let srv = spawn_test_server(TestDataFactory::repositories(TestDataFactory::history()));

    let mut response = srv
        .get("/api/employees/1/detail-report?months=3&year=2025")
        .send()
        .await
        .unwrap();
    assert_ok(&response);

    let body: Value = response.json().await.unwrap();
    let data = envelope_data(&body);

    assert_eq!(keys(data), vec!["report", "selectedMonths", "year"]);
    assert_eq!(
        keys(&data["report"][0]),
        vec![
            "employeeId",
            "employeeName",
            "services",
            "totalCommission",
            "totalCount",
            "totalRevenue",
        ]
    );
    assert_eq!(
        keys(&data["report"][0]["services"][0]),
        vec!["commission", "count", "revenue", "serviceId", "serviceName"]
    );
}

#[actix_web::test]
async fn test_error_contract() {
    let srv = spawn_test_server(TestDataFactory::repositories(vec![]));

    let mut response = srv.get("/api/establishments/404/quote?services=1").send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(keys(&body), vec!["error"]);
    assert_error_body(&body, 404);
}

#[actix_web::test]
async fn test_health_endpoints() {
    let srv = spawn_test_server(TestDataFactory::repositories(vec![]));

    let response = srv.get("/health").send().await.unwrap();
    assert_ok(&response);

    let response = srv.get("/ready").send().await.unwrap();
    assert_ok(&response);
}
