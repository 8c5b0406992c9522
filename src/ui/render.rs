//! Small text-rendering helpers shared by the pages.

use std::io::{self, Write};

use console::style;

use super::icons::{
    CROSS, INFO, RISK_HIGH, RISK_LOW, RISK_MEDIUM, RISK_OTHER, STATE_ACTIVE, STATE_DONE,
    STATE_NEW, STATE_OTHER, STATE_REMOVED, WARN,
};
use crate::models::RiskLevel;

const BAR_WIDTH: usize = 30;

pub fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(title).bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)
}

pub fn subheading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(title).bold().underlined())
}

/// A failure line. `error` is always shown.
pub fn error_line(out: &mut impl Write, context: &str, error: &str) -> io::Result<()> {
    writeln!(out, "{}{}: {}", CROSS, style(context).red().bold(), error)
}

pub fn info_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", INFO, style(message).cyan())
}

pub fn warn_line(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}{}", WARN, style(message).yellow())
}

/// `[██████░░░░]` for a `0.0..=1.0` fraction.
pub fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

/// Work item state prefixed with its marker.
pub fn format_work_item_state(state: &str) -> String {
    let marker = match state {
        "New" => &STATE_NEW,
        "Active" | "In Progress" => &STATE_ACTIVE,
        "Done" | "Closed" => &STATE_DONE,
        "Removed" => &STATE_REMOVED,
        _ => &STATE_OTHER,
    };
    format!("{} {}", marker, state)
}

pub fn format_risk(level: &RiskLevel) -> String {
    let marker = match level {
        RiskLevel::Low => &RISK_LOW,
        RiskLevel::Medium => &RISK_MEDIUM,
        RiskLevel::High => &RISK_HIGH,
        RiskLevel::Other(_) | RiskLevel::Unknown => &RISK_OTHER,
    };
    format!("{} {}", marker, style(level.label()).bold())
}

pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `Last updated: HH:MM:SS` footer.
pub fn footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!(
            "Last updated: {}",
            chrono::Local::now().format("%H:%M:%S")
        ))
        .dim()
    )
}
