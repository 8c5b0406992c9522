use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

pub const FIELD_TITLE: &str = "System.Title";
pub const FIELD_TYPE: &str = "System.WorkItemType";
pub const FIELD_STATE: &str = "System.State";
pub const FIELD_ASSIGNED_TO: &str = "System.AssignedTo";

/// A backend-tracked unit of work.
///
/// Field presence is never guaranteed, so every accessor has a fallback.
/// The backend object is kept verbatim and is what gets serialized, so the
/// item can be forwarded to the AI endpoints unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct WorkItem {
    pub id: i64,
    pub fields: Map<String, Value>,
    raw: Value,
}

#[derive(Deserialize)]
struct WorkItemFields {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    fields: Map<String, Value>,
}

impl TryFrom<Value> for WorkItem {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let f = WorkItemFields::deserialize(&raw)?;
        Ok(Self {
            id: f.id,
            fields: f.fields,
            raw,
        })
    }
}

impl From<WorkItem> for Value {
    fn from(item: WorkItem) -> Self {
        item.raw
    }
}

impl WorkItem {
    /// The backend object as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> &str {
        self.text_field(FIELD_TITLE).unwrap_or("N/A")
    }

    pub fn work_item_type(&self) -> &str {
        self.text_field(FIELD_TYPE).unwrap_or("N/A")
    }

    pub fn state(&self) -> &str {
        self.text_field(FIELD_STATE).unwrap_or("Unknown")
    }

    /// Assignee display name. The backend sends either a plain string or an
    /// identity object with `displayName`.
    pub fn assigned_to(&self) -> &str {
        match self.fields.get(FIELD_ASSIGNED_TO) {
            Some(Value::String(name)) => name,
            Some(Value::Object(identity)) => identity
                .get("displayName")
                .or_else(|| identity.get("uniqueName"))
                .and_then(Value::as_str)
                .unwrap_or("Unassigned"),
            _ => "Unassigned",
        }
    }
}

/// Kinds of work item the create form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WorkItemType {
    Task,
    Bug,
    UserStory,
    Feature,
}

impl WorkItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemType::Task => "Task",
            WorkItemType::Bug => "Bug",
            WorkItemType::UserStory => "User Story",
            WorkItemType::Feature => "Feature",
        }
    }
}

impl std::fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for `POST /workitems`.
///
/// All four keys are always sent; an absent optional goes out as `null` so
/// the backend can tell "not provided" from "explicitly empty".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkItem {
    pub work_item_type: String,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
}

impl NewWorkItem {
    pub fn new(work_item_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            work_item_type: work_item_type.into(),
            title: title.into(),
            description: None,
            assigned_to: None,
        }
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn assigned_to(mut self, assigned_to: Option<String>) -> Self {
        self.assigned_to = assigned_to;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_work_item_accessors() {
        let item: WorkItem = serde_json::from_value(json!({
            "id": 7,
            "rev": 3,
            "fields": {
                "System.Title": "Fix login",
                "System.WorkItemType": "Bug",
                "System.State": "Active",
                "System.AssignedTo": {"displayName": "Dana", "uniqueName": "dana@example.com"}
            }
        }))
        .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.title(), "Fix login");
        assert_eq!(item.work_item_type(), "Bug");
        assert_eq!(item.state(), "Active");
        assert_eq!(item.assigned_to(), "Dana");
        assert_eq!(item.raw()["rev"], json!(3));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let item: WorkItem = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(item.title(), "N/A");
        assert_eq!(item.work_item_type(), "N/A");
        assert_eq!(item.state(), "Unknown");
        assert_eq!(item.assigned_to(), "Unassigned");
    }

    #[test]
    fn test_null_fields_fall_back() {
        let item: WorkItem = serde_json::from_value(json!({"id": 2, "fields": null})).unwrap();
        assert!(item.fields.is_empty());
        assert_eq!(item.title(), "N/A");
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": 2, "fields": null}));
    }

    #[test]
    fn test_missing_fields_not_invented_on_serialize() {
        let item: WorkItem = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_non_string_field_falls_back() {
        let item: WorkItem =
            serde_json::from_value(json!({"id": 1, "fields": {"System.Title": 12}})).unwrap();
        assert_eq!(item.title(), "N/A");
    }

    #[test]
    fn test_plain_string_assignee() {
        let item: WorkItem = serde_json::from_value(
            json!({"id": 1, "fields": {"System.AssignedTo": "sam@example.com"}}),
        )
        .unwrap();
        assert_eq!(item.assigned_to(), "sam@example.com");
    }

    #[test]
    fn test_unknown_keys_survive_reserialization() {
        let raw = json!({"id": 5, "url": "https://dev/5", "fields": {"System.Title": "T"}});
        let item: WorkItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_new_work_item_sends_nulls_and_empty_strings() {
        let payload = NewWorkItem::new("Bug", "Crash on load")
            .description(Some(String::new()))
            .assigned_to(None);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "workItemType": "Bug",
                "title": "Crash on load",
                "description": "",
                "assignedTo": null
            })
        );
    }

    #[test]
    fn test_work_item_type_labels() {
        assert_eq!(WorkItemType::UserStory.as_str(), "User Story");
        assert_eq!(WorkItemType::Bug.to_string(), "Bug");
    }
}
