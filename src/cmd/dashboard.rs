//! `sprintdash dashboard` and `sprintdash health`.

use anyhow::Result;
use std::io::{self, Write};

use sprintdash::config::DashboardConfig;
use sprintdash::ui::icons::CHART;
use sprintdash::ui::render::{footer, heading};
use sprintdash::ui::with_spinner;
use sprintdash::views::{dashboard, health};

pub async fn cmd_dashboard(config: &DashboardConfig) -> Result<()> {
    let api = super::connect(config)?;

    let banner = with_spinner("Checking backend...", health::load(&api)).await;
    let view = with_spinner("Loading sprint metrics...", dashboard::load(&api)).await;

    let mut out = io::stdout().lock();
    heading(&mut out, &format!("{}Sprint Dashboard", CHART))?;
    banner.render(&mut out)?;
    writeln!(out)?;
    view.render(&mut out)?;
    footer(&mut out)?;
    Ok(())
}

pub async fn cmd_health(config: &DashboardConfig) -> Result<()> {
    let api = super::connect(config)?;
    let banner = with_spinner("Checking backend...", health::load(&api)).await;

    let mut out = io::stdout().lock();
    banner.render(&mut out)?;
    writeln!(out, "   Backend: {} (from {})", config.base_url, config.url_source)?;
    footer(&mut out)?;
    Ok(())
}
