//! Backend value objects.
//!
//! Every type here is read-only from the dashboard's point of view: the
//! backend owns the data and the dashboard only renders or forwards it.
//! Field names follow the backend's camelCase JSON exactly.

pub mod analysis;
pub mod control;
pub mod metrics;
pub mod sprint;
pub mod work_item;

pub use analysis::{AnalysisResult, RiskLevel};
pub use control::{HealthStatus, McpStatus};
pub use metrics::SprintMetrics;
pub use sprint::{Sprint, SprintAttributes, SprintDetail, TimeFrame};
pub use work_item::{NewWorkItem, WorkItem, WorkItemType};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Item counts: integers, integral floats such as `3.0`, or `null` (0).
/// Negative or non-finite values count as 0.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if n.is_finite() && n > 0.0 {
        Ok(n.round() as u64)
    } else {
        Ok(0)
    }
}
