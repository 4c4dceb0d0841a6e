use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::CorsConfig;

/// Any `http://localhost:<port>` origin plus the configured ones
pub fn cors(config: &CorsConfig) -> Cors {
    let allow_any = config.allowed_origins.iter().any(|origin| origin == "*");

    let base = if allow_any {
        Cors::default().allow_any_origin()
    } else {
        let allowed = config.allowed_origins.clone();
        Cors::default().allowed_origin_fn(move |origin, _req| {
            origin
                .to_str()
                .map(|origin| is_localhost(origin) || allowed.iter().any(|o| o == origin))
                .unwrap_or(false)
        })
    };

    base.allowed_methods([Method::GET, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}

fn is_localhost(origin: &str) -> bool {
    origin
        .strip_prefix("http://localhost")
        .is_some_and(|rest| {
            rest.is_empty()
                || rest
                    .strip_prefix(':')
                    .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
        })
}
