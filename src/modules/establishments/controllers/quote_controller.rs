use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::ApiResponse;
use crate::modules::analytics::models::filter::parse_sequence;
use crate::modules::establishments::services::PricingService;

/// Query parameters for the quote endpoint
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// Comma-separated service ids
    #[serde(default)]
    pub services: Option<String>,
}

/// Price a service selection with the establishment's overrides
/// GET /establishments/{establishment_id}/quote?services=1,2
pub async fn get_quote(
    service: web::Data<Arc<PricingService>>,
    path: web::Path<i64>,
    query: web::Query<QuoteQuery>,
) -> Result<HttpResponse, AppError> {
    let establishment_id = path.into_inner();
    // Booking order is kept; repeats are collapsed by the resolver
    let service_ids = parse_sequence::<i64>("services", query.services.as_deref(), |_| true);

    if service_ids.is_empty() {
        return Err(AppError::validation("At least one service id is required"));
    }

    let quote = service.quote(establishment_id, &service_ids).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(quote)))
}

/// Configure routes for establishments module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/establishments")
            .route("/{establishment_id}/quote", web::get().to(get_quote)),
    );
}
