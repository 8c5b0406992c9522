//! Configuration view and validation commands: `sprintdash config`.

use anyhow::{Context, Result, bail};

use sprintdash::config::{
    DEFAULT_BASE_URL, DashboardConfig, DashboardToml, config_file_path, env_base_url,
};

use super::super::{Cli, ConfigCommands};

pub fn cmd_config(cli: &Cli, command: Option<ConfigCommands>) -> Result<()> {
    let config_path = config_file_path(cli.config.as_deref())
        .context("No config directory on this platform; pass --config <path>")?;

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Sprintdash Configuration");
            println!("========================");
            println!();

            let toml = if config_path.exists() {
                println!("Config file: {}", config_path.display());
                println!();
                DashboardToml::load(&config_path)?
            } else {
                println!("No config file found at {}", config_path.display());
                println!("Using default configuration.");
                println!();
                DashboardToml::default()
            };

            println!("[backend]");
            match &toml.backend.url {
                Some(url) => println!("  url = \"{}\"", url),
                None => println!("  url = (unset)"),
            }
            println!("  api_timeout_secs = {}", toml.backend.api_timeout_secs);
            println!("  health_timeout_secs = {}", toml.backend.health_timeout_secs);
            println!();

            // Show effective values (including env overrides)
            println!("Effective values (with env/CLI overrides):");
            let config = DashboardConfig::resolve(&toml, env_base_url(), cli.base_url.clone())?;
            println!("  base_url = \"{}\" (from {})", config.base_url, config.url_source);
            println!("  api_timeout = {}s", config.api_timeout.as_secs());
            println!("  health_timeout = {}s", config.health_timeout.as_secs());
            println!();

            if !config_path.exists() {
                println!("Run 'sprintdash config init' to create a config file.");
                println!();
            }
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !config_path.exists() {
                println!("No config file found. Using defaults (valid).");
                return Ok(());
            }

            let toml = DashboardToml::load(&config_path)?;
            let warnings = toml.validate();

            if warnings.is_empty() {
                println!("Configuration is valid.");
            } else {
                println!("Configuration warnings:");
                for warning in &warnings {
                    println!("  - {}", warning);
                }
                println!();
                bail!("{} configuration warning(s) found", warnings.len());
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if config_path.exists() {
                println!("Config file already exists at {}", config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            let mut toml = DashboardToml::default();
            toml.backend.url = Some(DEFAULT_BASE_URL.to_string());
            toml.save(&config_path)?;

            println!("Created config file at {}", config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [backend] url");
            println!("  - [backend] api_timeout_secs, health_timeout_secs");
            println!();
        }
    }

    Ok(())
}
