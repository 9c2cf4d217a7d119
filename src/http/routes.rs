use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(handlers::dashboard))
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard queries
        .route("/api/state", get(handlers::get_state))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calls", get(handlers::list_calls))
        .route("/api/calls/:call_id", get(handlers::get_call))
        // Agent control
        .route("/api/agent/toggle", post(handlers::toggle_agent))
        .route("/api/calls/simulate", post(handlers::simulate_call))
        // Live updates
        .route("/api/events", get(handlers::events))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
