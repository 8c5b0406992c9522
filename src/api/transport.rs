use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::envelope::ResponseEnvelope;
use crate::config::DashboardConfig;
use crate::errors::TransportError;

/// Prefix every business endpoint lives under.
pub const API_PREFIX: &str = "api";

/// HTTP verbs the backend API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request in, one envelope out. Implementations never fail: every
/// problem is reported through `success = false`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Call a business endpoint under `/api`.
    async fn request(&self, method: Method, path: &str, body: Option<Value>)
    -> ResponseEnvelope<Value>;

    /// GET a root-level path (outside `/api`) with the short probe timeout.
    async fn probe(&self, path: &str) -> ResponseEnvelope<Value>;
}

/// Join URL segments, trimming redundant slashes on both sides of each join.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// `reqwest`-backed transport. Holds one pooled client for the whole process.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_timeout: Duration,
    probe_timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &DashboardConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sprintdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_timeout: config.api_timeout,
            probe_timeout: config.health_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.base_url, &[API_PREFIX, path])
    }

    pub fn root_url(&self, path: &str) -> String {
        join_url(&self.base_url, &[path])
    }

    /// Send the request and parse a 2xx body as JSON.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        timeout: Duration,
    ) -> Result<Value, TransportError> {
        let mut builder = self
            .client
            .request(method.into(), url)
            .header("Accept", "application/json")
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(url, timeout, e))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(url, timeout, e))?;

        if !status.is_success() {
            // The backend often wraps errors in its own envelope; keep its message.
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned));
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%url, error = %e, "response body is not valid JSON");
            TransportError::InvalidBody
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ResponseEnvelope<Value> {
        let url = self.api_url(path);
        tracing::debug!(%method, %url, "backend request");

        let result = self
            .execute(method, &url, body.as_ref(), self.api_timeout)
            .await
            .and_then(|value| {
                serde_json::from_value::<ResponseEnvelope<Value>>(value).map_err(|e| {
                    tracing::warn!(%url, error = %e, "response body is not an envelope");
                    TransportError::InvalidBody
                })
            });

        match result {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "backend request failed");
                ResponseEnvelope::failure(e.to_string())
            }
        }
    }

    async fn probe(&self, path: &str) -> ResponseEnvelope<Value> {
        let url = self.root_url(path);
        tracing::debug!(%url, "backend probe");

        match self
            .execute(Method::Get, &url, None, self.probe_timeout)
            .await
        {
            Ok(body) => {
                let timestamp = body.get("timestamp").and_then(Value::as_i64).unwrap_or(0);
                ResponseEnvelope::ok(Some(body), timestamp)
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "backend probe failed");
                ResponseEnvelope::failure(e.to_string())
            }
        }
    }
}
