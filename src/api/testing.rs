//! In-memory transport that records every call, for facade and view tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::envelope::ResponseEnvelope;
use super::transport::{Method, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `None` for probes.
    pub method: Option<Method>,
    pub path: String,
    pub body: Option<Value>,
}

impl RecordedRequest {
    fn key(&self) -> String {
        match self.method {
            Some(method) => format!("{} {}", method, self.path),
            None => format!("PROBE {}", self.path),
        }
    }
}

/// Canned responses keyed by `"METHOD /path"` (or `"PROBE /path"`).
/// Unmatched calls get `{"success": true}`.
#[derive(Default)]
pub struct RecordingTransport {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, body: Value) -> Self {
        self.responses.insert(key.to_string(), body);
        self
    }

    /// Make a call fail the way an unreachable backend would.
    pub fn fail(self, key: &str, error: &str) -> Self {
        self.respond(key, json!({"success": false, "error": error, "timestamp": 0}))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.requests().iter().map(RecordedRequest::key).collect()
    }

    fn record(&self, request: RecordedRequest) -> ResponseEnvelope<Value> {
        let key = request.key();
        self.requests.lock().unwrap().push(request);
        let body = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| json!({"success": true}));
        serde_json::from_value(body).unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ResponseEnvelope<Value> {
        self.record(RecordedRequest {
            method: Some(method),
            path: path.to_string(),
            body,
        })
    }

    async fn probe(&self, path: &str) -> ResponseEnvelope<Value> {
        let key = format!("PROBE {}", path);
        let body = self.responses.get(&key).cloned();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: None,
            path: path.to_string(),
            body: None,
        });
        match body {
            Some(Value::Object(map)) if map.get("success") == Some(&Value::Bool(false)) => {
                serde_json::from_value(Value::Object(map)).unwrap()
            }
            Some(body) => ResponseEnvelope::ok(Some(body), 0),
            None => ResponseEnvelope::failure("no probe response configured"),
        }
    }
}
