//! `sprintdash analyze`.

use anyhow::Result;
use std::io;

use sprintdash::config::DashboardConfig;
use sprintdash::ui::render::{footer, heading};
use sprintdash::ui::with_spinner;
use sprintdash::views::analysis;

pub async fn cmd_analyze(config: &DashboardConfig, context: Option<&str>) -> Result<()> {
    let api = super::connect(config)?;
    let view = with_spinner("Analyzing sprint...", analysis::load(&api, context)).await;

    let mut out = io::stdout().lock();
    heading(&mut out, "AI Sprint Analysis")?;
    view.render(&mut out)?;
    footer(&mut out)?;
    Ok(())
}
