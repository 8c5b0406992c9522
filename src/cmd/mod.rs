//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module        | Commands handled         |
//! |---------------|--------------------------|
//! | `dashboard`   | `Dashboard`, `Health`    |
//! | `work_items`  | `WorkItems`              |
//! | `analysis`    | `Analyze`                |
//! | `control`     | `Control`                |
//! | `config`      | `Config`                 |
//!
//! Page commands load first (behind a spinner) and then render to stdout.
//! A failure page is still a successful run.

pub mod analysis;
pub mod config;
pub mod control;
pub mod dashboard;
pub mod work_items;

pub use analysis::cmd_analyze;
pub use config::cmd_config;
pub use control::cmd_control;
pub use dashboard::{cmd_dashboard, cmd_health};
pub use work_items::cmd_work_items;

use anyhow::{Context, Result};
use sprintdash::api::ApiClient;
use sprintdash::config::DashboardConfig;

pub(crate) fn connect(config: &DashboardConfig) -> Result<ApiClient> {
    ApiClient::from_config(config).context("Failed to build HTTP client")
}
