use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::analytics::models::{AnalyticsFilter, AnalyticsQuery};
use crate::modules::analytics::services::AnalyticsService;

/// Full establishment analytics
/// GET /analytics/{establishment_id}
///
/// Every filter parameter is optional; malformed values are ignored rather
/// than rejected.
pub async fn get_analytics(
    service: web::Data<Arc<AnalyticsService>>,
    path: web::Path<i64>,
    query: web::Query<AnalyticsQuery>,
) -> Result<HttpResponse, AppError> {
    let establishment_id = path.into_inner();
    let filter = AnalyticsFilter::from(&query.into_inner());
    debug!(establishment_id, ?filter, "Analytics requested");

    let result = service.compute_analytics(establishment_id, &filter).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(result)))
}

/// Configure routes for analytics module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics").route("/{establishment_id}", web::get().to(get_analytics)),
    );
}
