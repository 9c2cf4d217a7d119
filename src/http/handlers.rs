use super::state::AppState;
use crate::agent::DashboardEvent;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Json,
    },
};
use futures::stream::{self, Stream};
use serde::Serialize;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ToggleAgentResponse {
    pub agent_active: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Render the dashboard page
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.agent.snapshot().await;
    match state.view.render(&snapshot, &state.title) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Failed to render dashboard: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to render dashboard".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/state
/// Full dashboard snapshot
pub async fn get_state(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.agent.snapshot().await)
}

/// GET /api/stats
/// Aggregate statistics
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.agent.snapshot().await.stats)
}

/// GET /api/calls
/// Call history, newest first
pub async fn list_calls(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.agent.snapshot().await.calls)
}

/// GET /api/calls/:call_id
/// A single call with its transcript
pub async fn get_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> impl IntoResponse {
    match state.agent.call(&call_id).await {
        Some(call) => (StatusCode::OK, Json(call)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Call {} not found", call_id),
            }),
        )
            .into_response(),
    }
}

/// POST /api/agent/toggle
/// Turn the agent on or off
pub async fn toggle_agent(State(state): State<AppState>) -> impl IntoResponse {
    let agent_active = state.agent.toggle().await;
    info!("Agent toggled via API: active={}", agent_active);
    Json(ToggleAgentResponse { agent_active })
}

/// POST /api/calls/simulate
/// Ring a call immediately
pub async fn simulate_call(State(state): State<AppState>) -> impl IntoResponse {
    match state.agent.ring_now().await {
        Some(call) => (StatusCode::OK, Json(call)).into_response(),
        None => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Agent is inactive or already handling a call".to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /api/events
/// Stream dashboard events as they happen
pub async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.agent.subscribe();

    let stream = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => return Some((Ok::<_, Infallible>(to_sse(&event)), rx)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn to_sse(event: &DashboardEvent) -> Event {
    Event::default().json_data(event).unwrap_or_else(|e| {
        warn!("Failed to serialize {} event: {}", event.kind(), e);
        Event::default().comment("unserializable event")
    })
}
