//! Permissive CORS layer.
//!
//! The mini-app page runs inside the messaging client's webview, so every
//! response carries a wildcard cross-origin policy; the layer also answers
//! OPTIONS preflights.

use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Header carrying the admin credential on mutating routes.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Create the gateway CORS layer.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(ADMIN_KEY_HEADER),
        ])
}
