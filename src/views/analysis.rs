use std::io::{self, Write};

use crate::api::{ApiClient, Transport};
use crate::models::AnalysisResult;
use crate::ui::icons::{BULB, CHART, CHECK, CLIPBOARD, ROCKET, WARN};
use crate::ui::render::{error_line, format_risk, info_line, subheading, warn_line};

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisView {
    Report(AnalysisResult),
    NoActiveSprint,
    NoCurrentSprint,
    Failed { stage: &'static str, error: String },
}

/// Metrics, then the current sprint's work items, then the AI call. Each
/// step runs only if the previous one produced data.
pub async fn load<T: Transport>(api: &ApiClient<T>, context: Option<&str>) -> AnalysisView {
    let metrics = api.current_sprint_metrics().await;
    if !metrics.success {
        return AnalysisView::Failed {
            stage: "Error loading sprint metrics",
            error: metrics.error_message().to_string(),
        };
    }
    let Some(metrics) = metrics.data else {
        return AnalysisView::NoActiveSprint;
    };

    let detail = api.current_sprint_detail().await;
    if !detail.success {
        return AnalysisView::Failed {
            stage: "Failed to fetch work items",
            error: detail.error_message().to_string(),
        };
    }
    let Some(detail) = detail.data else {
        return AnalysisView::NoCurrentSprint;
    };

    let analysis = api
        .analyze_sprint(&metrics, &detail.work_items, context)
        .await;
    if !analysis.success {
        return AnalysisView::Failed {
            stage: "Error analyzing sprint",
            error: analysis.error_message().to_string(),
        };
    }
    AnalysisView::Report(analysis.data.unwrap_or_default())
}

impl AnalysisView {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            AnalysisView::NoActiveSprint => info_line(out, "No active sprint to analyze"),
            AnalysisView::NoCurrentSprint => info_line(out, "No current sprint found"),
            AnalysisView::Failed { stage, error } => error_line(out, stage, error),
            AnalysisView::Report(report) => render_report(out, report),
        }
    }
}

fn render_report(out: &mut impl Write, report: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "{}Analysis Complete", CHECK)?;

    subheading(out, &format!("{}Impact Assessment", CHART))?;
    writeln!(out, "{}", report.impact.as_deref().unwrap_or("N/A"))?;

    subheading(out, &format!("{}Risk Level", WARN))?;
    writeln!(out, "{}", format_risk(&report.risk()))?;

    subheading(out, &format!("{}Release Readiness", ROCKET))?;
    if report.is_release_ready() {
        writeln!(out, "{}Ready for release", CHECK)?;
    } else {
        warn_line(out, "Not ready for release")?;
    }

    subheading(out, &format!("{}Recommendations", BULB))?;
    for rec in &report.recommendations {
        writeln!(out, "- {}", rec)?;
    }

    subheading(out, &format!("{}Guidelines", CLIPBOARD))?;
    for guide in &report.guidelines {
        writeln!(out, "- {}", guide)?;
    }
    Ok(())
}
