//! Route definitions for the guardrail HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with all routes mounted under `/api`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .route("/events", post(handlers::events::ingest))
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
