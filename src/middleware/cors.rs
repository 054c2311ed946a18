use std::time::Duration;

use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::middleware::auth::ADMIN_PASSWORD_HEADER;

/// Any origin may call the API, including the admin endpoints; the
/// password header is what gates them.
pub fn api_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(ADMIN_PASSWORD_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}
