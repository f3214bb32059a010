//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, the envelope-shaped fallbacks and the
//! middleware stack (panic capture, compression, tracing, CORS).

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

use super::error::AppError;
use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Turn a handler panic into a 500 envelope.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::service_info))
        .route("/api/designers", get(handlers::list_designers))
        .route("/api/designers/search", post(handlers::search_designers))
        .route("/api/designers/{id}", get(handlers::get_designer))
        .route("/api/shortlist", post(handlers::manage_shortlist))
        .route("/api/shortlist/{user_id}", get(handlers::get_shortlist))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/tags", get(handlers::list_tags))
        .route("/api/locations", get(handlers::list_locations));

    with_middleware(routes, config).with_state(state)
}

/// Envelope fallbacks and the middleware stack shared by every route.
fn with_middleware(routes: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    // The browser client is served from a different origin.
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    routes
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}
