use actix_web::{error, web, HttpRequest};

use crate::core::AppError;

/// Path extractor errors (e.g. a non-numeric establishment id) as JSON 400s
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, req: &HttpRequest| {
        tracing::warn!(path = %req.path(), "Rejected path: {}", err);
        AppError::validation(format!("Invalid path parameter: {}", err)).into()
    })
}

/// Query extractor errors as JSON 400s
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, req: &HttpRequest| {
        tracing::warn!(path = %req.path(), "Rejected query string: {}", err);
        AppError::validation(format!("Invalid query string: {}", err)).into()
    })
}
