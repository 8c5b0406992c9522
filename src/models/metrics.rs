use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{lenient_count, null_as_default};

/// Aggregated numbers for the current sprint, computed by the backend.
///
/// Counts are taken as-is; the dashboard does not check that completed plus
/// in-progress fits within the total. The backend object is kept verbatim
/// and is what gets serialized, so forwarding metrics never invents fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SprintMetrics {
    pub sprint_name: String,
    pub total_work_items: u64,
    pub completed_work_items: u64,
    pub in_progress_work_items: u64,
    pub remaining_work: f64,
    pub completed_work: f64,
    pub velocity: f64,
    raw: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsFields {
    #[serde(default, deserialize_with = "null_as_default")]
    sprint_name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    total_work_items: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    completed_work_items: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    in_progress_work_items: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    remaining_work: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    completed_work: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    velocity: f64,
}

impl TryFrom<Value> for SprintMetrics {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let f = MetricsFields::deserialize(&raw)?;
        Ok(Self {
            sprint_name: f.sprint_name,
            total_work_items: f.total_work_items,
            completed_work_items: f.completed_work_items,
            in_progress_work_items: f.in_progress_work_items,
            remaining_work: f.remaining_work,
            completed_work: f.completed_work,
            velocity: f.velocity,
            raw,
        })
    }
}

impl From<SprintMetrics> for Value {
    fn from(m: SprintMetrics) -> Self {
        if !m.raw.is_null() {
            return m.raw;
        }
        // Built locally rather than received.
        json!({
            "sprintName": m.sprint_name,
            "totalWorkItems": m.total_work_items,
            "completedWorkItems": m.completed_work_items,
            "inProgressWorkItems": m.in_progress_work_items,
            "remainingWork": m.remaining_work,
            "completedWork": m.completed_work,
            "velocity": m.velocity,
        })
    }
}

impl SprintMetrics {
    /// The backend object as received (`null` when built locally).
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Completed items as a percentage of the total; `0.0` for an empty sprint.
    pub fn completion_rate(&self) -> f64 {
        if self.total_work_items == 0 {
            return 0.0;
        }
        self.completed_work_items as f64 / self.total_work_items as f64 * 100.0
    }

    /// Completion as a `0.0..=1.0` fraction, clamped for progress bars.
    pub fn progress(&self) -> f64 {
        (self.completion_rate() / 100.0).clamp(0.0, 1.0)
    }
}
