//! Stub backend shared by the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

/// Requests received by the stub, as `(method path, body)`.
pub type Received = Arc<RwLock<Vec<(String, Value)>>>;

pub struct StubBackend {
    pub addr: SocketAddr,
    pub received: Received,
}

impl StubBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn received(&self) -> Vec<(String, Value)> {
        self.received.read().await.clone()
    }
}

/// Start the stub on an ephemeral port. `current_sprint` controls whether
/// `/api/sprints` reports a sprint with `timeFrame == "current"`.
pub async fn start(current_sprint: bool) -> StubBackend {
    let received: Received = Arc::new(RwLock::new(Vec::new()));
    let app = build_router(received.clone(), current_sprint);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("stub backend error: {}", e);
        }
    });

    StubBackend { addr, received }
}

#[derive(Clone)]
struct StubState {
    received: Received,
    current_sprint: bool,
}

fn build_router(received: Received, current_sprint: bool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/sprints", get(sprints_handler))
        .route("/api/sprints/current/metrics", get(metrics_handler))
        .route("/api/sprints/{id}/workitems", get(sprint_items_handler))
        .route("/api/workitems", post(create_handler))
        .route("/api/workitems/{id}", get(work_item_handler))
        .route("/api/mcp/status", get(mcp_status_handler))
        .route("/api/mcp/command", post(mcp_command_handler))
        .route("/api/slow", get(slow_handler))
        .route("/api/plain", get(plain_handler))
        .route("/api/bare", get(bare_handler))
        .fallback(fallback_handler)
        .with_state(StubState {
            received,
            current_sprint,
        })
}

async fn record(state: &StubState, key: String, body: Value) {
    state.received.write().await.push((key, body));
}

/// Unrouted requests are still recorded, then answered with 404.
async fn fallback_handler(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    record(&state, format!("{} {}", method, uri.path()), body).await;
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "error": "no such route", "timestamp": 0})),
    )
}

async fn health_handler(State(state): State<StubState>) -> Json<Value> {
    record(&state, "GET /health".into(), Value::Null).await;
    Json(json!({"status": "healthy", "timestamp": 1700000000000i64}))
}

async fn sprints_handler(State(state): State<StubState>) -> Json<Value> {
    record(&state, "GET /api/sprints".into(), Value::Null).await;
    let time_frame = if state.current_sprint { "current" } else { "past" };
    Json(json!({
        "success": true,
        "timestamp": 1700000000001i64,
        "data": [
            {"id": "s-41", "name": "Sprint 41", "attributes": {"timeFrame": "past"}},
            {"id": "s-42", "name": "Sprint 42", "attributes": {"timeFrame": time_frame}}
        ]
    }))
}

/// Envelope served at `/api/sprints/current/metrics`.
pub fn metrics_body() -> Value {
    json!({
        "success": true,
        "timestamp": 1700000000002i64,
        "requestId": "req-7",
        "data": {
            "sprintName": "Sprint 42",
            "totalWorkItems": 10,
            "completedWorkItems": 4,
            "inProgressWorkItems": 3,
            "remainingWork": 20,
            "completedWork": 12,
            "velocity": 18
        }
    })
}

async fn metrics_handler(State(state): State<StubState>) -> Json<Value> {
    record(&state, "GET /api/sprints/current/metrics".into(), Value::Null).await;
    Json(metrics_body())
}

async fn sprint_items_handler(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> Json<Value> {
    record(&state, format!("GET /api/sprints/{}/workitems", id), Value::Null).await;
    Json(json!({
        "success": true,
        "timestamp": 1700000000003i64,
        "data": [
            {"id": 7, "fields": {"System.Title": "Login page", "System.WorkItemType": "Task", "System.State": "Active"}},
            {"id": 8, "fields": {"System.Title": "Crash on load", "System.WorkItemType": "Bug", "System.State": "New"}}
        ]
    }))
}

async fn create_handler(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    record(&state, "POST /api/workitems".into(), body).await;
    Json(json!({"success": true, "timestamp": 1700000000004i64, "data": {"id": 42}}))
}

async fn work_item_handler(
    State(state): State<StubState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    record(&state, format!("GET /api/workitems/{}", id), Value::Null).await;
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "error": "Work item not found", "timestamp": 1})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"success": true, "timestamp": 5, "data": {"id": id, "fields": {"System.Title": "Login page"}}})),
    )
}

async fn mcp_status_handler(State(state): State<StubState>) -> Json<Value> {
    record(&state, "GET /api/mcp/status".into(), Value::Null).await;
    Json(json!({"success": true, "timestamp": 6, "data": {"online": true, "version": "2.1.0"}}))
}

async fn mcp_command_handler(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&state, "POST /api/mcp/command".into(), body).await;
    Json(json!({"success": true, "timestamp": 7, "data": {"accepted": true}}))
}

async fn slow_handler() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"success": true, "timestamp": 8}))
}

async fn plain_handler() -> &'static str {
    "definitely not json"
}

async fn bare_handler() -> Json<Value> {
    Json(json!({"items": [1, 2, 3]}))
}
