//! Router assembly for the launchpad HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/launches",
            get(handlers::launches::list_launches).post(handlers::launches::create_launch),
        )
        .route(
            "/launches/{id}",
            get(handlers::launches::get_launch)
                .put(handlers::launches::update_launch)
                .delete(handlers::launches::delete_launch),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
