//! Cross-origin policy for the frontend dev server.
//!
//! Only the two local frontend origins are allowed. Credentialed CORS cannot
//! answer with `*`, so methods and headers are mirrored from the preflight
//! request instead.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
