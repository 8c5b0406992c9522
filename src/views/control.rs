use std::io::{self, Write};

use console::style;
use serde_json::Value;

use crate::api::{ApiClient, Transport, parse_json_payload};
use crate::ui::icons::CHECK;
use crate::ui::render::{error_line, info_line, pretty_json, warn_line};

#[derive(Debug, Clone, PartialEq)]
pub enum ControlStatusView {
    Online { version: String },
    Offline,
    Failed(String),
}

pub async fn load_status<T: Transport>(api: &ApiClient<T>) -> ControlStatusView {
    let env = api.mcp_status().await;
    if !env.success {
        return ControlStatusView::Failed(env.error_message().to_string());
    }
    match env.data {
        Some(status) if status.online => ControlStatusView::Online {
            version: status.version_label().to_string(),
        },
        _ => ControlStatusView::Offline,
    }
}

impl ControlStatusView {
    pub fn is_online(&self) -> bool {
        matches!(self, ControlStatusView::Online { .. })
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            ControlStatusView::Online { version } => writeln!(
                out,
                "{}{}",
                CHECK,
                style(format!("MCP Server Online (Version: {})", version)).green()
            ),
            ControlStatusView::Offline => {
                warn_line(out, "MCP Server Offline")?;
                info_line(out, "MCP integration is disabled or the server is not reachable")
            }
            ControlStatusView::Failed(error) => {
                error_line(out, "Error checking MCP status", error)
            }
        }
    }
}

/// Result of a command or query against the control server.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlOutcome {
    Sent { label: &'static str, data: Option<Value> },
    /// Input was invalid and nothing was sent.
    Rejected(String),
    /// Server unavailable; carries the status that blocked the call.
    Unavailable(ControlStatusView),
    Failed(String),
}

/// Validate the payload locally, check the server is online, then send.
pub async fn send_command<T: Transport>(
    api: &ApiClient<T>,
    command: &str,
    payload_text: &str,
) -> ControlOutcome {
    let payload = match parse_json_payload(payload_text) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(error = %e, "rejected command payload");
            return ControlOutcome::Rejected("Invalid JSON payload".to_string());
        }
    };

    let status = load_status(api).await;
    if !status.is_online() {
        return ControlOutcome::Unavailable(status);
    }

    let env = api.send_mcp_command(command, payload).await;
    if env.success {
        ControlOutcome::Sent {
            label: "Command sent successfully",
            data: env.data,
        }
    } else {
        ControlOutcome::Failed(env.error_message().to_string())
    }
}

pub async fn run_query<T: Transport>(api: &ApiClient<T>, query: &str) -> ControlOutcome {
    let status = load_status(api).await;
    if !status.is_online() {
        return ControlOutcome::Unavailable(status);
    }

    let env = api.query_mcp(query).await;
    if env.success {
        ControlOutcome::Sent {
            label: "Query executed successfully",
            data: env.data,
        }
    } else {
        ControlOutcome::Failed(env.error_message().to_string())
    }
}

impl ControlOutcome {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            ControlOutcome::Sent { label, data } => {
                writeln!(out, "{}{}", CHECK, style(label).green())?;
                if let Some(data) = data {
                    writeln!(out, "{}", pretty_json(data))?;
                }
                Ok(())
            }
            ControlOutcome::Rejected(reason) => error_line(out, "Invalid input", reason),
            ControlOutcome::Unavailable(status) => status.render(out),
            ControlOutcome::Failed(error) => error_line(out, "Error", error),
        }
    }
}
