use std::io::{self, Write};

use console::style;

use crate::api::{ApiClient, Transport};
use crate::models::SprintMetrics;
use crate::ui::render::{error_line, info_line, progress_bar, subheading};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Ready(SprintMetrics),
    NoActiveSprint,
    Failed(String),
}

pub async fn load<T: Transport>(api: &ApiClient<T>) -> DashboardView {
    let env = api.current_sprint_metrics().await;
    if !env.success {
        return DashboardView::Failed(env.error_message().to_string());
    }
    match env.data {
        Some(metrics) => DashboardView::Ready(metrics),
        None => DashboardView::NoActiveSprint,
    }
}

impl DashboardView {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            DashboardView::Failed(error) => error_line(out, "Error loading sprint data", error),
            DashboardView::NoActiveSprint => info_line(out, "No active sprint found"),
            DashboardView::Ready(m) => render_metrics(out, m),
        }
    }
}

fn render_metrics(out: &mut impl Write, m: &SprintMetrics) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!("Current Sprint: {}", m.sprint_name)).cyan().bold()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<20} {:<20} {:<20} {:<20}",
        "Total Work Items", "Completed", "In Progress", "Completion Rate"
    )?;
    writeln!(
        out,
        "{:<20} {:<20} {:<20} {:<20}",
        m.total_work_items,
        m.completed_work_items,
        m.in_progress_work_items,
        format!("{:.1}%", m.completion_rate())
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<20} {:<20} {:<20}",
        "Remaining Work", "Completed Work", "Velocity"
    )?;
    writeln!(
        out,
        "{:<20} {:<20} {:<20}",
        format!("{} hrs", m.remaining_work),
        format!("{} hrs", m.completed_work),
        m.velocity
    )?;

    subheading(out, "Sprint Progress")?;
    writeln!(
        out,
        "{} {}",
        progress_bar(m.progress()),
        style(format!("{:.1}%", m.completion_rate())).bold()
    )
}
