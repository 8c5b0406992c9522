use serde_json::{Map, Value, json};

use super::envelope::ResponseEnvelope;
use super::transport::{HttpTransport, Method, Transport};
use crate::config::DashboardConfig;
use crate::errors::{InputError, TransportError};
use crate::models::{
    AnalysisResult, HealthStatus, McpStatus, NewWorkItem, Sprint, SprintDetail, SprintMetrics,
    WorkItem,
};

/// Typed facade over the backend REST API.
///
/// Each method maps to exactly one transport call (except
/// [`ApiClient::current_sprint_detail`], which sequences two). None of them
/// fail: errors come back as `success = false` envelopes.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &DashboardConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Sprints ───────────────────────────────────────────────────────

    pub async fn list_sprints(&self) -> ResponseEnvelope<Vec<Sprint>> {
        self.transport
            .request(Method::Get, "/sprints", None)
            .await
            .decode()
    }

    pub async fn sprint_work_items(&self, sprint_id: &str) -> ResponseEnvelope<Vec<WorkItem>> {
        self.transport
            .request(Method::Get, &format!("/sprints/{}/workitems", sprint_id), None)
            .await
            .decode()
    }

    /// `data = None` on success means there is no active sprint.
    pub async fn current_sprint_metrics(&self) -> ResponseEnvelope<SprintMetrics> {
        self.transport
            .request(Method::Get, "/sprints/current/metrics", None)
            .await
            .decode()
    }

    /// Find the current sprint, then fetch its work items.
    ///
    /// A successful envelope with `data = None` means no sprint is marked
    /// current; the work-items call is not made in that case, nor when the
    /// sprint listing fails.
    pub async fn current_sprint_detail(&self) -> ResponseEnvelope<SprintDetail> {
        let sprints = self.list_sprints().await;
        if !sprints.success {
            return sprints.cast_failure();
        }
        let timestamp = sprints.timestamp;
        let sprints = sprints.data.unwrap_or_default();
        let Some(sprint) = Sprint::find_current(&sprints).cloned() else {
            tracing::debug!(count = sprints.len(), "no sprint marked current");
            return ResponseEnvelope::ok(None, timestamp);
        };

        let items = self.sprint_work_items(&sprint.id).await;
        if !items.success {
            return items.cast_failure();
        }
        let timestamp = items.timestamp;
        let detail = SprintDetail {
            sprint,
            work_items: items.data.unwrap_or_default(),
        };
        ResponseEnvelope::ok(Some(detail), timestamp)
    }

    // ── Work items ────────────────────────────────────────────────────

    pub async fn create_work_item(&self, item: &NewWorkItem) -> ResponseEnvelope<WorkItem> {
        self.transport
            .request(Method::Post, "/workitems", Some(json!(item)))
            .await
            .decode()
    }

    pub async fn get_work_item(&self, id: i64) -> ResponseEnvelope<WorkItem> {
        self.transport
            .request(Method::Get, &format!("/workitems/{}", id), None)
            .await
            .decode()
    }

    pub async fn update_work_item(
        &self,
        id: i64,
        updates: Map<String, Value>,
    ) -> ResponseEnvelope<WorkItem> {
        self.transport
            .request(
                Method::Patch,
                &format!("/workitems/{}", id),
                Some(json!({ "updates": updates })),
            )
            .await
            .decode()
    }

    pub async fn delete_work_item(&self, id: i64) -> ResponseEnvelope<Value> {
        self.transport
            .request(Method::Delete, &format!("/workitems/{}", id), None)
            .await
    }

    // ── AI analysis ───────────────────────────────────────────────────

    pub async fn analyze_sprint(
        &self,
        sprint_data: &SprintMetrics,
        work_items: &[WorkItem],
        context: Option<&str>,
    ) -> ResponseEnvelope<AnalysisResult> {
        let body = json!({
            "sprintData": sprint_data,
            "workItems": work_items,
            "context": context,
        });
        self.transport
            .request(Method::Post, "/ai/analyze-sprint", Some(body))
            .await
            .decode()
    }

    pub async fn work_item_recommendations(&self, work_item: &WorkItem) -> ResponseEnvelope<Value> {
        self.transport
            .request(
                Method::Post,
                "/ai/workitem-recommendations",
                Some(json!({ "workItem": work_item })),
            )
            .await
    }

    // ── MCP control server ────────────────────────────────────────────

    pub async fn mcp_status(&self) -> ResponseEnvelope<McpStatus> {
        self.transport
            .request(Method::Get, "/mcp/status", None)
            .await
            .decode()
    }

    pub async fn send_mcp_command(&self, command: &str, payload: Value) -> ResponseEnvelope<Value> {
        self.transport
            .request(
                Method::Post,
                "/mcp/command",
                Some(json!({ "command": command, "payload": payload })),
            )
            .await
    }

    pub async fn query_mcp(&self, query: &str) -> ResponseEnvelope<Value> {
        self.transport
            .request(Method::Post, "/mcp/query", Some(json!({ "query": query })))
            .await
    }

    // ── Health ────────────────────────────────────────────────────────

    pub async fn health_check(&self) -> ResponseEnvelope<HealthStatus> {
        self.transport.probe("/health").await.decode()
    }
}

/// Parse free-form JSON typed by the user before anything is sent.
pub fn parse_json_payload(text: &str) -> Result<Value, InputError> {
    serde_json::from_str(text).map_err(|source| InputError::InvalidJson {
        field: "payload",
        source,
    })
}

/// Parse work-item field updates; they must form a JSON object.
pub fn parse_updates(text: &str) -> Result<Map<String, Value>, InputError> {
    let value: Value = serde_json::from_str(text).map_err(|source| InputError::InvalidJson {
        field: "updates",
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(InputError::NotAnObject { field: "updates" }),
    }
}
