// Integration tests for the HTTP surface
//
// Requests go straight into the router with `oneshot`; no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use call_agent::{create_router, AgentConfig, AppState, CallAgent, ScriptedSource};
use futures::StreamExt;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

/// An inactive agent that only takes calls rung through the API
fn quiet_agent() -> CallAgent {
    let mut config = AgentConfig::default();
    config.simulation.tick_interval_ms = 3_600_000;
    CallAgent::new(config, Box::new(ScriptedSource::new().with_callers(["Lisa Martinez"])))
}

fn app(agent: &CallAgent) -> Router {
    create_router(AppState::new(agent.clone(), "AI Call Agent").unwrap())
}

async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(router, method, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let agent = quiet_agent();
    let (status, body) = send(app(&agent), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_initial_state() {
    let agent = quiet_agent();
    let (status, state) = send_json(app(&agent), "GET", "/api/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["agent_active"], false);
    assert!(state["active_call"].is_null());
    assert_eq!(state["calls"], serde_json::json!([]));
    assert_eq!(state["stats"]["total_calls"], 0);
    assert_eq!(state["stats"]["satisfaction"], 98);
}

#[tokio::test]
async fn test_simulate_rejected_while_inactive() {
    let agent = quiet_agent();
    let (status, body) = send_json(app(&agent), "POST", "/api/calls/simulate").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("inactive"));
}

#[tokio::test]
async fn test_simulate_then_busy() {
    let agent = quiet_agent();
    agent.activate().await;

    let (status, call) = send_json(app(&agent), "POST", "/api/calls/simulate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(call["status"], "incoming");
    assert_eq!(call["caller"], "Lisa Martinez");
    assert!(call["id"].as_str().unwrap().starts_with("call-"));

    let (status, _) = send_json(app(&agent), "POST", "/api/calls/simulate").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, calls) = send_json(app(&agent), "GET", "/api/calls").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls.as_array().map(Vec::len), Some(1));

    let uri = format!("/api/calls/{}", call["id"].as_str().unwrap());
    let (status, fetched) = send_json(app(&agent), "GET", &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], call["id"]);
    assert_eq!(fetched["transcript"], serde_json::json!([]));

    agent.shutdown().await;
}

#[tokio::test]
async fn test_unknown_call_is_not_found() {
    let agent = quiet_agent();
    let (status, body) = send_json(app(&agent), "GET", "/api/calls/call-nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Call call-nope not found");
}

#[tokio::test]
async fn test_toggle_agent() {
    let agent = quiet_agent();

    let (status, body) = send_json(app(&agent), "POST", "/api/agent/toggle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agent_active"], true);
    assert!(agent.is_active().await);

    let (_, body) = send_json(app(&agent), "POST", "/api/agent/toggle").await;
    assert_eq!(body["agent_active"], false);
    assert!(!agent.is_active().await);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let agent = quiet_agent();
    let (status, stats) = send_json(app(&agent), "GET", "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["answered_calls"], 0);
    assert_eq!(stats["avg_duration"], 0);
}

#[tokio::test]
async fn test_dashboard_page() {
    let agent = quiet_agent();
    let (status, body) = send(app(&agent), "GET", "/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>AI Call Agent</title>"));
    assert!(html.contains("Waiting for calls..."));
    assert!(html.contains("No calls yet"));
    assert!(html.contains("Inactive"));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let agent = quiet_agent();
    let (status, _) = send(app(&agent), "GET", "/api/agent/toggle").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_events_stream_dashboard_changes() {
    let agent = quiet_agent();
    agent.activate().await;

    let request = Request::builder()
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();
    let response = app(&agent).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

    // The handler has subscribed by the time the response exists
    let mut body = response.into_body().into_data_stream();
    let call = agent.ring_now().await.expect("line is free");

    let frame = timeout(Duration::from_secs(5), body.next())
        .await
        .expect("event within timeout")
        .expect("stream still open")
        .unwrap();
    let text = String::from_utf8(frame.to_vec()).unwrap();

    assert!(text.contains(r#"data: {"type":"call_ringing""#), "got {:?}", text);
    assert!(text.contains(&call.id));
    assert!(text.contains("Lisa Martinez"));

    agent.shutdown().await;
}

#[tokio::test]
async fn test_events_stream_reports_toggle() {
    let agent = quiet_agent();

    let request = Request::builder()
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();
    let response = app(&agent).oneshot(request).await.unwrap();
    let mut body = response.into_body().into_data_stream();

    let (status, _) = send_json(app(&agent), "POST", "/api/agent/toggle").await;
    assert_eq!(status, StatusCode::OK);

    let frame = timeout(Duration::from_secs(5), body.next())
        .await
        .expect("event within timeout")
        .expect("stream still open")
        .unwrap();
    let text = String::from_utf8(frame.to_vec()).unwrap();

    assert!(text.contains(r#"data: {"type":"agent_toggled","active":true}"#), "got {:?}", text);

    agent.shutdown().await;
}
