use std::collections::BTreeSet;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::Datelike;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::analytics::models::filter::{parse_list, parse_scalar};
use crate::modules::reports::models::ReportMonth;
use crate::modules::reports::services::ReportService;

/// Query parameters for the employee financial report
#[derive(Debug, Deserialize)]
pub struct EmployeeReportQuery {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl EmployeeReportQuery {
    /// Both `month` and `year` must be valid, otherwise all periods are reported
    fn period(&self) -> Option<ReportMonth> {
        let month = parse_scalar::<u32>("month", self.month.as_deref())
            .filter(|month| (1..=12).contains(month))?;
        let year = parse_scalar::<i32>("year", self.year.as_deref())?;
        Some(ReportMonth { month, year })
    }
}

/// Query parameters for the service detail report
#[derive(Debug, Deserialize)]
pub struct DetailReportQuery {
    /// Comma-separated months, e.g. `1,2,3`
    #[serde(default)]
    pub months: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// GET /employees/{establishment_id}/report
pub async fn get_employee_report(
    service: web::Data<Arc<ReportService>>,
    path: web::Path<i64>,
    query: web::Query<EmployeeReportQuery>,
) -> Result<HttpResponse, AppError> {
    let establishment_id = path.into_inner();
    let report = service
        .employee_report(establishment_id, query.period())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(report)))
}

/// GET /employees/{establishment_id}/detail-report
///
/// Missing `year` or `months` default to the current year and month.
pub async fn get_detail_report(
    service: web::Data<Arc<ReportService>>,
    path: web::Path<i64>,
    query: web::Query<DetailReportQuery>,
) -> Result<HttpResponse, AppError> {
    let establishment_id = path.into_inner();
    let today = chrono::Local::now().date_naive();

    let year = parse_scalar::<i32>("year", query.year.as_deref()).unwrap_or(today.year());
    let months = parse_list("months", query.months.as_deref(), |month: &u32| {
        (1..=12).contains(month)
    })
    .unwrap_or_else(|| BTreeSet::from([today.month()]));

    let report = service
        .detail_report(establishment_id, &months, year)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(report)))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("/{establishment_id}/report", web::get().to(get_employee_report))
            .route(
                "/{establishment_id}/detail-report",
                web::get().to(get_detail_report),
            ),
    );
}
