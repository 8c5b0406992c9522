use std::io::{self, Write};

use console::style;
use serde_json::Value;

use crate::api::{ApiClient, Transport, parse_updates};
use crate::errors::InputError;
use crate::models::work_item::{FIELD_ASSIGNED_TO, FIELD_STATE, FIELD_TITLE, FIELD_TYPE};
use crate::models::{NewWorkItem, Sprint, WorkItem};
use crate::ui::icons::CHECK;
use crate::ui::render::{error_line, format_work_item_state, info_line, pretty_json, subheading};

// ── List ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum WorkItemsView {
    Items { sprint: Sprint, items: Vec<WorkItem> },
    EmptySprint { sprint: Sprint },
    NoCurrentSprint,
    Failed(String),
}

pub async fn load<T: Transport>(api: &ApiClient<T>) -> WorkItemsView {
    let env = api.current_sprint_detail().await;
    if !env.success {
        return WorkItemsView::Failed(env.error_message().to_string());
    }
    match env.data {
        None => WorkItemsView::NoCurrentSprint,
        Some(detail) if detail.work_items.is_empty() => WorkItemsView::EmptySprint {
            sprint: detail.sprint,
        },
        Some(detail) => WorkItemsView::Items {
            sprint: detail.sprint,
            items: detail.work_items,
        },
    }
}

impl WorkItemsView {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            WorkItemsView::Failed(error) => error_line(out, "Error loading work items", error),
            WorkItemsView::NoCurrentSprint => info_line(out, "No current sprint found"),
            WorkItemsView::EmptySprint { sprint } => {
                subheading(out, &format!("Current Sprint Work Items ({})", sprint.display_name()))?;
                info_line(out, "No work items in current sprint")
            }
            WorkItemsView::Items { sprint, items } => {
                subheading(out, &format!("Current Sprint Work Items ({})", sprint.display_name()))?;
                writeln!(out)?;
                for item in items {
                    render_row(out, item)?;
                }
                writeln!(out)?;
                writeln!(out, "{} work items", items.len())
            }
        }
    }
}

fn render_row(out: &mut impl Write, item: &WorkItem) -> io::Result<()> {
    writeln!(
        out,
        "{:<50} {:<22} {}",
        format!("#{} - {}", item.id, item.title()),
        format!("Type: {}", item.work_item_type()),
        format_work_item_state(item.state())
    )
}

// ── Create ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(i64),
    Rejected(String),
    Failed(String),
}

/// Create a work item. An empty title is rejected without calling the backend.
pub async fn create<T: Transport>(api: &ApiClient<T>, item: NewWorkItem) -> CreateOutcome {
    if item.title.trim().is_empty() {
        return CreateOutcome::Rejected(InputError::MissingTitle.to_string());
    }
    let env = api.create_work_item(&item).await;
    if !env.success {
        return CreateOutcome::Failed(env.error_message().to_string());
    }
    match env.data {
        Some(created) => CreateOutcome::Created(created.id),
        None => CreateOutcome::Failed("backend did not return the created work item".to_string()),
    }
}

impl CreateOutcome {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            CreateOutcome::Created(id) => {
                writeln!(
                    out,
                    "{}{}",
                    CHECK,
                    style(format!("Work item created: #{}", id)).green().bold()
                )
            }
            CreateOutcome::Rejected(reason) => error_line(out, "Invalid input", reason),
            CreateOutcome::Failed(error) => error_line(out, "Error", error),
        }
    }
}

// ── Show / update / delete ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Found(WorkItem),
    Updated(WorkItem),
    Deleted(i64),
    Recommendations { item: WorkItem, data: Option<Value> },
    NotReturned(i64),
    Rejected(String),
    Failed(String),
}

pub async fn show<T: Transport>(api: &ApiClient<T>, id: i64) -> ItemOutcome {
    let env = api.get_work_item(id).await;
    if !env.success {
        return ItemOutcome::Failed(env.error_message().to_string());
    }
    env.data.map_or(ItemOutcome::NotReturned(id), ItemOutcome::Found)
}

/// Apply field updates given as a JSON object. Malformed input never leaves
/// the machine.
pub async fn update<T: Transport>(api: &ApiClient<T>, id: i64, updates_text: &str) -> ItemOutcome {
    let updates = match parse_updates(updates_text) {
        Ok(updates) => updates,
        Err(e) => return ItemOutcome::Rejected(e.to_string()),
    };
    let env = api.update_work_item(id, updates).await;
    if !env.success {
        return ItemOutcome::Failed(env.error_message().to_string());
    }
    env.data.map_or(ItemOutcome::NotReturned(id), ItemOutcome::Updated)
}

pub async fn delete<T: Transport>(api: &ApiClient<T>, id: i64) -> ItemOutcome {
    let env = api.delete_work_item(id).await;
    if env.success {
        ItemOutcome::Deleted(id)
    } else {
        ItemOutcome::Failed(env.error_message().to_string())
    }
}

/// Fetch the item, then ask the AI endpoint about it. Skipped if the fetch fails.
pub async fn recommend<T: Transport>(api: &ApiClient<T>, id: i64) -> ItemOutcome {
    let item = match show(api, id).await {
        ItemOutcome::Found(item) => item,
        other => return other,
    };
    let env = api.work_item_recommendations(&item).await;
    if !env.success {
        return ItemOutcome::Failed(env.error_message().to_string());
    }
    ItemOutcome::Recommendations {
        item,
        data: env.data,
    }
}

impl ItemOutcome {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            ItemOutcome::Found(item) => render_detail(out, item),
            ItemOutcome::Updated(item) => {
                writeln!(out, "{}Work item #{} updated", CHECK, item.id)?;
                render_detail(out, item)
            }
            ItemOutcome::Deleted(id) => writeln!(out, "{}Work item #{} deleted", CHECK, id),
            ItemOutcome::Recommendations { item, data } => {
                subheading(out, &format!("Recommendations for #{} - {}", item.id, item.title()))?;
                match data {
                    Some(data) => writeln!(out, "{}", pretty_json(data)),
                    None => info_line(out, "No recommendations returned"),
                }
            }
            ItemOutcome::NotReturned(id) => {
                info_line(out, &format!("Backend returned no data for work item #{}", id))
            }
            ItemOutcome::Rejected(reason) => error_line(out, "Invalid input", reason),
            ItemOutcome::Failed(error) => error_line(out, "Error", error),
        }
    }
}

fn render_detail(out: &mut impl Write, item: &WorkItem) -> io::Result<()> {
    subheading(out, &format!("#{} - {}", item.id, item.title()))?;
    writeln!(out, "  Type:        {}", item.work_item_type())?;
    writeln!(out, "  State:       {}", format_work_item_state(item.state()))?;
    writeln!(out, "  Assigned To: {}", item.assigned_to())?;

    let others: Vec<_> = item
        .fields
        .iter()
        .filter(|(k, _)| {
            !matches!(
                k.as_str(),
                FIELD_TITLE | FIELD_TYPE | FIELD_STATE | FIELD_ASSIGNED_TO
            )
        })
        .collect();
    if !others.is_empty() {
        writeln!(out)?;
        for (name, value) in others {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            writeln!(out, "  {}: {}", name, shown)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use serde_json::json;

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn current_sprint() -> Value {
        json!({"success": true, "data": [
            {"id": "s-1", "name": "Sprint 7", "attributes": {"timeFrame": "current"}}
        ]})
    }

    #[tokio::test]
    async fn test_lists_items_with_fallbacks() {
        let api = ApiClient::new(
            RecordingTransport::new()
                .respond("GET /sprints", current_sprint())
                .respond(
                    "GET /sprints/s-1/workitems",
                    json!({"success": true, "data": [
                        {"id": 11, "fields": {"System.Title": "Login page", "System.WorkItemType": "Task", "System.State": "Done"}},
                        {"id": 12, "fields": {}}
                    ]}),
                ),
        );
        let view = load(&api).await;
        let text = render_to_string(|b| view.render(b));
        assert!(text.contains("Sprint 7"));
        assert!(text.contains("Login page"));
        assert!(text.contains("Type: Task"));
        assert!(text.contains("N/A"));
        assert!(text.contains("Unknown"));
        assert!(text.contains("2 work items"));
    }

    #[tokio::test]
    async fn test_no_current_sprint_skips_work_item_fetch() {
        let api = ApiClient::new(RecordingTransport::new().respond(
            "GET /sprints",
            json!({"success": true, "data": [{"id": "s-0", "attributes": {"timeFrame": "past"}}]}),
        ));
        let view = load(&api).await;
        assert_eq!(view, WorkItemsView::NoCurrentSprint);
        assert_eq!(api.transport().calls(), vec!["GET /sprints".to_string()]);
        let text = render_to_string(|b| view.render(b));
        assert!(text.contains("No current sprint found"));
        assert!(!text.contains("Error"));
    }

    #[tokio::test]
    async fn test_empty_sprint_is_informational() {
        let api = ApiClient::new(
            RecordingTransport::new()
                .respond("GET /sprints", current_sprint())
                .respond("GET /sprints/s-1/workitems", json!({"success": true, "data": []})),
        );
        let view = load(&api).await;
        assert!(matches!(view, WorkItemsView::EmptySprint { .. }));
        let text = render_to_string(|b| view.render(b));
        assert!(text.contains("No work items in current sprint"));
    }

    #[tokio::test]
    async fn test_sprint_listing_failure_shows_error() {
        let api = ApiClient::new(RecordingTransport::new().fail("GET /sprints", "timed out"));
        let view = load(&api).await;
        let text = render_to_string(|b| view.render(b));
        assert!(text.contains("timed out"));
        assert_eq!(api.transport().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_create_confirms_new_id() {
        let api = ApiClient::new(RecordingTransport::new().respond(
            "POST /workitems",
            json!({"success": true, "data": {"id": 42}}),
        ));
        let item = NewWorkItem::new("Bug", "Crash on load").description(Some(String::new()));
        let outcome = create(&api, item).await;
        assert_eq!(outcome, CreateOutcome::Created(42));

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            Some(json!({
                "workItemType": "Bug",
                "title": "Crash on load",
                "description": "",
                "assignedTo": null
            }))
        );
        let text = render_to_string(|b| outcome.render(b));
        assert!(text.contains("Work item created: #42"));
    }

    #[tokio::test]
    async fn test_create_with_blank_title_is_rejected_locally() {
        let api = ApiClient::new(RecordingTransport::new());
        let outcome = create(&api, NewWorkItem::new("Task", "   ")).await;
        assert!(matches!(outcome, CreateOutcome::Rejected(_)));
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_shows_error() {
        let api = ApiClient::new(
            RecordingTransport::new().fail("POST /workitems", "backend returned 400 Bad Request: title too long"),
        );
        let outcome = create(&api, NewWorkItem::new("Task", "x")).await;
        let text = render_to_string(|b| outcome.render(b));
        assert!(text.contains("title too long"));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_json_without_calling_backend() {
        let api = ApiClient::new(RecordingTransport::new());
        let outcome = update(&api, 5, "{state: Done").await;
        assert!(matches!(outcome, ItemOutcome::Rejected(ref r) if r.contains("Invalid JSON updates")));
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_patch() {
        let api = ApiClient::new(RecordingTransport::new().respond(
            "PATCH /workitems/5",
            json!({"success": true, "data": {"id": 5, "fields": {"System.State": "Done"}}}),
        ));
        let outcome = update(&api, 5, r#"{"System.State": "Done"}"#).await;
        let text = render_to_string(|b| outcome.render(b));
        assert!(text.contains("Work item #5 updated"));
        assert!(text.contains("Done"));
    }

    #[tokio::test]
    async fn test_show_renders_extra_fields() {
        let api = ApiClient::new(RecordingTransport::new().respond(
            "GET /workitems/8",
            json!({"success": true, "data": {"id": 8, "fields": {
                "System.Title": "Audit logs",
                "Microsoft.VSTS.Scheduling.RemainingWork": 4
            }}}),
        ));
        let outcome = show(&api, 8).await;
        let text = render_to_string(|b| outcome.render(b));
        assert!(text.contains("#8 - Audit logs"));
        assert!(text.contains("Unassigned"));
        assert!(text.contains("Microsoft.VSTS.Scheduling.RemainingWork: 4"));
    }

    #[tokio::test]
    async fn test_delete_outcomes() {
        let api = ApiClient::new(RecordingTransport::new().fail("DELETE /workitems/2", "forbidden"));
        assert_eq!(delete(&api, 1).await, ItemOutcome::Deleted(1));
        assert_eq!(delete(&api, 2).await, ItemOutcome::Failed("forbidden".into()));
    }

    #[tokio::test]
    async fn test_recommend_skips_ai_call_when_item_fetch_fails() {
        let api = ApiClient::new(RecordingTransport::new().fail("GET /workitems/3", "not found"));
        let outcome = recommend(&api, 3).await;
        assert_eq!(outcome, ItemOutcome::Failed("not found".into()));
        assert_eq!(api.transport().calls(), vec!["GET /workitems/3".to_string()]);
    }

    #[tokio::test]
    async fn test_recommend_posts_fetched_item() {
        let api = ApiClient::new(
            RecordingTransport::new()
                .respond("GET /workitems/3", json!({"success": true, "data": {"id": 3}}))
                .respond(
                    "POST /ai/workitem-recommendations",
                    json!({"success": true, "data": {"suggestions": ["Split it"]}}),
                ),
        );
        let outcome = recommend(&api, 3).await;
        let text = render_to_string(|b| outcome.render(b));
        assert!(text.contains("Split it"));
        assert_eq!(api.transport().calls().len(), 2);
    }
}
