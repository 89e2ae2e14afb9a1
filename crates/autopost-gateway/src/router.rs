//! Route table and middleware stack.

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};
use crate::middleware::create_cors_layer;

/// Build the gateway router over shared application state.
///
/// Exposed separately from the service so tests can drive the router
/// in-process without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    Router::new()
        .route("/", get(handlers::serve_page))
        .route("/index.html", get(handlers::serve_page))
        .route("/health", get(handlers::health))
        .route("/api/history", get(handlers::get_history))
        .route("/api/add_target", post(handlers::add_target))
        .route("/api/post", post(handlers::post_broadcast))
        .route("/api/track_open", post(handlers::track_open))
        .route("/api/verify_init", post(handlers::verify_init))
        .fallback(handlers::not_found)
        .layer(middleware)
        .with_state(state)
}
