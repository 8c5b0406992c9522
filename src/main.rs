use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sprintdash::config::DashboardConfig;
use sprintdash::models::WorkItemType;

mod cmd;

#[derive(Parser)]
#[command(name = "sprintdash")]
#[command(version, about = "Terminal dashboard for sprint tracking, AI analysis and the MCP control server")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL. Overrides BACKEND_API_URL and the config file.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to the config file (defaults to <config dir>/sprintdash/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show backend health and current sprint metrics
    Dashboard,
    /// Check backend connectivity
    Health,
    /// List, create and manage work items in the current sprint
    WorkItems {
        #[command(subcommand)]
        command: WorkItemsCommands,
    },
    /// Run an AI analysis of the current sprint
    Analyze {
        /// Extra context forwarded to the analysis
        #[arg(long)]
        context: Option<String>,
    },
    /// Inspect and drive the MCP control server
    Control {
        #[command(subcommand)]
        command: ControlCommands,
    },
    /// View, validate or create the configuration file
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum WorkItemsCommands {
    /// List work items in the current sprint
    List,
    /// Create a work item
    Create {
        #[arg(long = "type", value_enum)]
        work_item_type: WorkItemType,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        assigned_to: Option<String>,
    },
    /// Show a single work item
    Show { id: i64 },
    /// Update fields of a work item from a JSON object
    Update {
        id: i64,
        /// e.g. '{"System.State": "Active"}'
        #[arg(long)]
        updates: String,
    },
    /// Delete a work item
    Delete {
        id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Ask the AI for recommendations on a work item
    Recommend { id: i64 },
}

#[derive(Subcommand, Clone)]
pub enum ControlCommands {
    /// Show MCP server status
    Status,
    /// Send a command to the MCP server
    Command {
        command: String,
        /// JSON payload
        #[arg(long, default_value = "{}")]
        payload: String,
    },
    /// Run a query against the MCP server
    Query { query: String },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file and show any warnings
    Validate,
    /// Write a default config file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    sprintdash::logging::init(cli.verbose);

    // Config commands must work even when the file or URL is invalid.
    if let Commands::Config { command } = &cli.command {
        return cmd::cmd_config(&cli, command.clone());
    }

    let config = DashboardConfig::load(cli.config.as_deref(), cli.base_url.clone())
        .context("Failed to load configuration")?;
    tracing::debug!(
        base_url = %config.base_url,
        source = %config.url_source,
        "resolved backend configuration"
    );

    match &cli.command {
        Commands::Dashboard => cmd::cmd_dashboard(&config).await?,
        Commands::Health => cmd::cmd_health(&config).await?,
        Commands::WorkItems { command } => cmd::cmd_work_items(&config, command.clone()).await?,
        Commands::Analyze { context } => cmd::cmd_analyze(&config, context.as_deref()).await?,
        Commands::Control { command } => cmd::cmd_control(&config, command.clone()).await?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
