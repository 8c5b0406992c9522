use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// Status of the MCP control server behind the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub online: bool,
    #[serde(default)]
    pub version: Option<String>,
}

impl McpStatus {
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("Unknown")
    }
}

/// Body of the root-level `/health` probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
