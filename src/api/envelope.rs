use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Uniform wrapper around every backend response.
///
/// `data` is populated when `success` is true, `error` when it is false.
/// `timestamp` is `0` for failures synthesized locally and backend-assigned
/// otherwise. Any other top-level keys the backend adds are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ResponseEnvelope<T> {
    /// A failure produced on this side of the wire.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: 0,
            extra: Map::new(),
        }
    }

    /// A successful envelope carrying `data`.
    pub fn ok(data: Option<T>, timestamp: i64) -> Self {
        Self {
            success: true,
            data,
            error: None,
            timestamp,
            extra: Map::new(),
        }
    }

    /// Error text for display; the backend does not always send one.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }

    /// Re-wrap a failure under a different payload type.
    pub fn cast_failure<U>(self) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            success: false,
            data: None,
            error: self.error,
            timestamp: self.timestamp,
            extra: self.extra,
        }
    }
}

impl ResponseEnvelope<Value> {
    /// Decode `data` into the shape an endpoint promises.
    ///
    /// Failures pass through untouched. A successful envelope whose `data`
    /// does not fit `T` becomes a local failure; absent or `null` data stays a
    /// success with `data = None`.
    pub fn decode<T: DeserializeOwned>(self) -> ResponseEnvelope<T> {
        if !self.success {
            return self.cast_failure();
        }
        let data = match self.data {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::warn!(error = %e, "response data did not match expected shape");
                    return ResponseEnvelope::failure(format!("unexpected response shape: {}", e));
                }
            },
        };
        ResponseEnvelope {
            extra: self.extra,
            ..ResponseEnvelope::ok(data, self.timestamp)
        }
    }
}
