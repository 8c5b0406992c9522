//! `sprintdash control`: the MCP control panel.

use anyhow::Result;
use std::io;

use sprintdash::config::DashboardConfig;
use sprintdash::ui::icons::WRENCH;
use sprintdash::ui::render::{footer, heading};
use sprintdash::ui::with_spinner;
use sprintdash::views::control;

use super::super::ControlCommands;

pub async fn cmd_control(config: &DashboardConfig, command: ControlCommands) -> Result<()> {
    let api = super::connect(config)?;
    let title = format!("{}MCP Control Panel", WRENCH);

    match command {
        ControlCommands::Status => {
            let view = with_spinner("Checking MCP status...", control::load_status(&api)).await;
            let mut out = io::stdout().lock();
            heading(&mut out, &title)?;
            view.render(&mut out)?;
            footer(&mut out)?;
        }
        ControlCommands::Command { command, payload } => {
            let outcome = with_spinner(
                "Sending command...",
                control::send_command(&api, &command, &payload),
            )
            .await;
            let mut out = io::stdout().lock();
            heading(&mut out, &title)?;
            outcome.render(&mut out)?;
            footer(&mut out)?;
        }
        ControlCommands::Query { query } => {
            let outcome = with_spinner("Running query...", control::run_query(&api, &query)).await;
            let mut out = io::stdout().lock();
            heading(&mut out, &title)?;
            outcome.render(&mut out)?;
            footer(&mut out)?;
        }
    }

    Ok(())
}
