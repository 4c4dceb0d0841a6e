pub mod analytics;
pub mod appointments;
pub mod establishments;
pub mod health;
pub mod reports;

use std::sync::Arc;

use actix_web::web;

use crate::middleware::{path_config, query_config};
use crate::storage::Repositories;
use analytics::AnalyticsService;
use establishments::services::PricingService;
use reports::ReportService;

/// Register services, extractor configs and every route on an app
pub fn configure(cfg: &mut web::ServiceConfig, repos: &Repositories) {
    cfg.app_data(web::Data::new(repos.clone()))
        .app_data(web::Data::new(Arc::new(AnalyticsService::new(repos.clone()))))
        .app_data(web::Data::new(Arc::new(ReportService::new(repos.clone()))))
        .app_data(web::Data::new(Arc::new(PricingService::new(repos.clone()))))
        .app_data(path_config())
        .app_data(query_config())
        .configure(health::configure)
        .service(
            web::scope("/api")
                .configure(analytics::controllers::configure)
                .configure(reports::controllers::configure)
                .configure(establishments::controllers::configure),
        );
}
