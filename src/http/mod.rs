//! HTTP dashboard and control API
//!
//! This module serves the simulated dashboard and a small JSON API:
//! - GET / - Rendered dashboard
//! - GET /api/state - Full dashboard snapshot
//! - GET /api/stats - Aggregate statistics
//! - GET /api/calls - Call history
//! - GET /api/calls/:call_id - A single call
//! - POST /api/agent/toggle - Turn the agent on or off
//! - POST /api/calls/simulate - Ring a call now
//! - GET /api/events - Server-sent dashboard events
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
