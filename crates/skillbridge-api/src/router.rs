//! Route definitions for the SkillBridge activity feed API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(activity_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(
            &state.config.server.cors,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Activity feed endpoints. All require a bearer token.
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(handlers::activity::list_activities))
        .route(
            "/activities/unread-count",
            get(handlers::activity::unread_count),
        )
        .route(
            "/activities/read-all",
            patch(handlers::activity::mark_all_read),
        )
        .route(
            "/activities/{id}/read",
            patch(handlers::activity::mark_read),
        )
        .route(
            "/activities/{id}",
            delete(handlers::activity::delete_activity),
        )
}

/// Liveness check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
