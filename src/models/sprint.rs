use serde::{Deserialize, Deserializer, Serialize};

use super::{WorkItem, null_as_default};

/// Position of a sprint relative to today, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Past,
    Current,
    Future,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintAttributes {
    #[serde(default)]
    pub time_frame: Option<TimeFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<String>,
}

/// A sprint (iteration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: SprintAttributes,
}

impl Sprint {
    pub fn is_current(&self) -> bool {
        self.attributes.time_frame == Some(TimeFrame::Current)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// The first sprint marked current, if any.
    pub fn find_current(sprints: &[Sprint]) -> Option<&Sprint> {
        sprints.iter().find(|s| s.is_current())
    }
}

/// The current sprint together with its work items.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintDetail {
    pub sprint: Sprint,
    pub work_items: Vec<WorkItem>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
