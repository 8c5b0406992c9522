//! `sprintdash work-items ...`.

use anyhow::Result;
use std::io;

use sprintdash::config::DashboardConfig;
use sprintdash::models::NewWorkItem;
use sprintdash::ui::render::{footer, heading};
use sprintdash::ui::with_spinner;
use sprintdash::views::work_items;

use super::super::WorkItemsCommands;

pub async fn cmd_work_items(config: &DashboardConfig, command: WorkItemsCommands) -> Result<()> {
    use dialoguer::Confirm;

    let api = super::connect(config)?;

    match command {
        WorkItemsCommands::List => {
            let view = with_spinner("Loading work items...", work_items::load(&api)).await;
            let mut out = io::stdout().lock();
            heading(&mut out, "Work Items")?;
            view.render(&mut out)?;
            footer(&mut out)?;
        }
        WorkItemsCommands::Create {
            work_item_type,
            title,
            description,
            assigned_to,
        } => {
            let item = NewWorkItem::new(work_item_type.as_str(), title)
                .description(description)
                .assigned_to(assigned_to);
            let outcome = with_spinner("Creating work item...", work_items::create(&api, item)).await;
            let mut out = io::stdout().lock();
            heading(&mut out, "Create New Work Item")?;
            outcome.render(&mut out)?;
            footer(&mut out)?;
        }
        WorkItemsCommands::Show { id } => {
            let outcome = with_spinner("Loading work item...", work_items::show(&api, id)).await;
            render_item(&outcome)?;
        }
        WorkItemsCommands::Update { id, updates } => {
            let outcome =
                with_spinner("Updating work item...", work_items::update(&api, id, &updates)).await;
            render_item(&outcome)?;
        }
        WorkItemsCommands::Delete { id, force } => {
            if !force {
                let confirm = Confirm::new()
                    .with_prompt(format!("Delete work item #{}?", id))
                    .default(false)
                    .interact()
                    .unwrap_or(false);

                if !confirm {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }
            let outcome = with_spinner("Deleting work item...", work_items::delete(&api, id)).await;
            render_item(&outcome)?;
        }
        WorkItemsCommands::Recommend { id } => {
            let outcome =
                with_spinner("Getting recommendations...", work_items::recommend(&api, id)).await;
            render_item(&outcome)?;
        }
    }

    Ok(())
}

fn render_item(outcome: &work_items::ItemOutcome) -> Result<()> {
    let mut out = io::stdout().lock();
    heading(&mut out, "Work Item")?;
    outcome.render(&mut out)?;
    footer(&mut out)?;
    Ok(())
}
