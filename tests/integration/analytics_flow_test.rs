//! End-to-end analytics requests through the full routing stack
//!
//! In-memory repositories, real handlers, real JSON serialization.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::Value;

use salon_analytics::appointments::models::Appointment;

async fn get_json(appointments: Vec<Appointment>, uri: &str) -> (u16, Value) {
    let app = test::init_service(
        App::new().configure(app_routes(TestDataFactory::repositories(appointments))),
    )
    .await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

async fn analytics(appointments: Vec<Appointment>, uri: &str) -> Value {
    let (status, body) = get_json(appointments, uri).await;
    assert_eq!(status, 200, "Unexpected response: {}", body);
    envelope_data(&body).clone()
}

#[actix_web::test]
async fn test_worked_example() {
    let data = analytics(vec![TestDataFactory::worked_example()], "/api/analytics/1").await;

    let summary = &data["summary"];
    assert_eq!(summary["totalAppointments"], 1);
    assert_eq!(decimal(&summary["totalRevenue"]), dec!(150));
    assert_eq!(decimal(&summary["totalCommission"]), dec!(65));
    assert_eq!(decimal(&summary["totalEstablishment"]), dec!(85));
    assert_eq!(decimal(&summary["ticketMedio"]), dec!(150));
    assert_eq!(summary["topEmployee"], "Ana");
    // Tie on count resolved by service id
    assert_eq!(summary["topService"], "Coloração");

    let ranking = data["employeeRanking"].as_array().unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0]["id"], EMP_ANA);
    assert_eq!(ranking[0]["appointments"], 1);
    assert_eq!(ranking[0]["services"], 2);

    let monday = &data["weekdayData"][1];
    assert_eq!(monday["day"], "Segunda");
    assert_eq!(monday["appointments"], 1);
    assert_eq!(decimal(&monday["revenue"]), dec!(150));

    let months = data["monthlyData"].as_array().unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["month"], "2025-03");
    assert_eq!(decimal(&months[0]["commission"]), dec!(65));
}

#[actix_web::test]
async fn test_history_totals_include_unassigned_work() {
    let data = analytics(TestDataFactory::history(), "/api/analytics/1").await;

    let summary = &data["summary"];
    // Cancelled and pending appointments excluded
    assert_eq!(summary["totalAppointments"], 3);
    assert_eq!(decimal(&summary["totalRevenue"]), dec!(350));
    assert_eq!(decimal(&summary["totalCommission"]), dec!(155));
    assert_eq!(decimal(&summary["totalEstablishment"]), dec!(195));

    let unassigned = &data["unassigned"];
    assert_eq!(unassigned["appointments"], 1);
    assert_eq!(unassigned["services"], 2);
    assert_eq!(decimal(&unassigned["revenue"]), dec!(150));
    assert_eq!(decimal(&unassigned["commission"]), dec!(65));

    let employees: Vec<&str> = data["employeeRanking"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(employees, vec!["Ana", "Bia"]);

    let services = data["serviceRanking"].as_array().unwrap();
    assert_eq!(services[0]["name"], "Escova");
    assert_eq!(services[0]["count"], 3);
    assert_eq!(services[1]["name"], "Coloração");
    assert_eq!(services[1]["count"], 2);

    // Picker lists: roster and offered services only
    assert_eq!(data["employees"].as_array().unwrap().len(), 2);
    let offered: Vec<&str> = data["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(offered, vec!["Coloração", "Escova"]);
}

#[actix_web::test]
async fn test_empty_establishment_is_well_formed() {
    let data = analytics(TestDataFactory::history(), "/api/analytics/2").await;

    let summary = &data["summary"];
    assert_eq!(summary["totalAppointments"], 0);
    assert_eq!(decimal(&summary["totalRevenue"]), dec!(0));
    assert_eq!(decimal(&summary["ticketMedio"]), dec!(0));
    assert!(summary["topService"].is_null());
    assert!(summary["topEmployee"].is_null());
    assert!(data["employeeRanking"].as_array().unwrap().is_empty());
    assert!(data["monthlyData"].as_array().unwrap().is_empty());
    assert_eq!(data["weekdayData"].as_array().unwrap().len(), 7);
    assert_eq!(data["employees"][0]["name"], "Carla");
}

#[actix_web::test]
async fn test_unknown_establishment_reports_nothing() {
    let data = analytics(TestDataFactory::history(), "/api/analytics/999").await;

    assert_eq!(data["summary"]["totalAppointments"], 0);
    assert!(data["services"].as_array().unwrap().is_empty());
    assert!(data["employees"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_other_establishments_do_not_leak() {
    let mut appointments = TestDataFactory::history();
    appointments.push(TestDataFactory::foreign_appointment());

    let with_foreign = analytics(appointments, "/api/analytics/1").await;
    let without = analytics(TestDataFactory::history(), "/api/analytics/1").await;

    assert_eq!(with_foreign, without);
}

#[actix_web::test]
async fn test_months_with_year_beats_year_alone() {
    let march = analytics(TestDataFactory::history(), "/api/analytics/1?months=3&year=2025").await;
    let whole_year = analytics(TestDataFactory::history(), "/api/analytics/1?year=2025").await;
    let other_year = analytics(TestDataFactory::history(), "/api/analytics/1?year=2024").await;

    assert_eq!(march["summary"]["totalAppointments"], 2);
    assert_eq!(whole_year["summary"]["totalAppointments"], 3);
    assert_eq!(other_year["summary"]["totalAppointments"], 0);
}

#[actix_web::test]
async fn test_date_range_is_inclusive() {
    let data = analytics(
        TestDataFactory::history(),
        "/api/analytics/1?startDate=2025-03-11&endDate=2025-04-05",
    )
    .await;

    assert_eq!(data["summary"]["totalAppointments"], 2);
}

#[actix_web::test]
async fn test_employee_filter_scopes_revenue_not_appointments() {
    let data = analytics(TestDataFactory::history(), "/api/analytics/1?employees=11").await;

    let summary = &data["summary"];
    assert_eq!(summary["totalAppointments"], 3);
    assert_eq!(decimal(&summary["totalRevenue"]), dec!(50));
    assert_eq!(decimal(&data["unassigned"]["revenue"]), dec!(0));
    assert_eq!(summary["topEmployee"], "Bia");
}

#[actix_web::test]
async fn test_weekday_filter() {
    // 2025-03-11 is a Tuesday
    let data = analytics(TestDataFactory::history(), "/api/analytics/1?weekdays=2").await;

    assert_eq!(data["summary"]["totalAppointments"], 1);
    assert_eq!(data["weekdayData"][2]["appointments"], 1);
    assert_eq!(data["weekdayData"][1]["appointments"], 0);
}

#[actix_web::test]
async fn test_status_filter_cannot_bypass_completion_gate() {
    let data = analytics(TestDataFactory::history(), "/api/analytics/1?statuses=cancelled,pending").await;

    assert_eq!(data["summary"]["totalAppointments"], 0);
    assert_eq!(decimal(&data["summary"]["totalRevenue"]), dec!(0));
}

#[actix_web::test]
async fn test_malformed_filters_are_ignored() {
    let noisy = analytics(
        TestDataFactory::history(),
        "/api/analytics/1?startDate=yesterday&months=13&weekdays=x&employees=",
    )
    .await;
    let plain = analytics(TestDataFactory::history(), "/api/analytics/1").await;

    assert_eq!(noisy, plain);
}

#[actix_web::test]
async fn test_non_numeric_establishment_is_rejected() {
    let (status, body) = get_json(vec![], "/api/analytics/abc").await;

    assert_eq!(status, 400);
    assert_error_body(&body, 400);
}
