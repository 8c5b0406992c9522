//! Layered configuration for the dashboard.
//!
//! Values are resolved once at startup, lowest precedence first:
//! built-in defaults → `config.toml` → `BACKEND_API_URL` → `--base-url`.
//!
//! # Configuration File Format
//!
//! ```toml
//! [backend]
//! url = "http://localhost:3000"
//! api_timeout_secs = 30
//! health_timeout_secs = 5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const BASE_URL_ENV: &str = "BACKEND_API_URL";

/// `[backend]` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendSection {
    /// Backend base URL (without the `/api` prefix)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
}

fn default_api_timeout_secs() -> u64 {
    30
}

fn default_health_timeout_secs() -> u64 {
    5
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: None,
            api_timeout_secs: default_api_timeout_secs(),
            health_timeout_secs: default_health_timeout_secs(),
        }
    }
}

/// On-disk representation of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardToml {
    #[serde(default)]
    pub backend: BackendSection,
}

impl DashboardToml {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Non-fatal problems worth reporting from `config validate`.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(url) = &self.backend.url {
            if let Err(e) = validate_base_url(url) {
                warnings.push(e.to_string());
            }
        }
        if self.backend.api_timeout_secs == 0 {
            warnings.push("backend.api_timeout_secs is 0; requests would time out immediately".into());
        }
        if self.backend.health_timeout_secs == 0 {
            warnings.push("backend.health_timeout_secs is 0; the health probe would always fail".into());
        }
        if self.backend.health_timeout_secs > self.backend.api_timeout_secs {
            warnings.push(format!(
                "backend.health_timeout_secs ({}) exceeds api_timeout_secs ({})",
                self.backend.health_timeout_secs, self.backend.api_timeout_secs
            ));
        }
        warnings
    }
}

/// Where the effective base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    Default,
    File,
    Environment,
    CommandLine,
}

impl std::fmt::Display for UrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlSource::Default => write!(f, "default"),
            UrlSource::File => write!(f, "config file"),
            UrlSource::Environment => write!(f, "{}", BASE_URL_ENV),
            UrlSource::CommandLine => write!(f, "--base-url"),
        }
    }
}

/// Resolved runtime configuration handed to the transport constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub url_source: UrlSource,
    pub api_timeout: Duration,
    pub health_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            url_source: UrlSource::Default,
            api_timeout: Duration::from_secs(default_api_timeout_secs()),
            health_timeout: Duration::from_secs(default_health_timeout_secs()),
        }
    }
}

impl DashboardConfig {
    /// Config for an explicit base URL with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            url_source: UrlSource::CommandLine,
            ..Self::default()
        }
    }

    /// Merge the layers. Pure: callers supply the environment value.
    pub fn resolve(
        file: &DashboardToml,
        env_url: Option<String>,
        cli_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        let (base_url, url_source) = if let Some(url) = non_empty(cli_url) {
            (url, UrlSource::CommandLine)
        } else if let Some(url) = non_empty(env_url) {
            (url, UrlSource::Environment)
        } else if let Some(url) = non_empty(file.backend.url.clone()) {
            (url, UrlSource::File)
        } else {
            (DEFAULT_BASE_URL.to_string(), UrlSource::Default)
        };

        validate_base_url(&base_url)?;
        if file.backend.api_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "api_timeout_secs",
            });
        }
        if file.backend.health_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "health_timeout_secs",
            });
        }

        Ok(Self {
            base_url: base_url.trim().to_string(),
            url_source,
            api_timeout: Duration::from_secs(file.backend.api_timeout_secs),
            health_timeout: Duration::from_secs(file.backend.health_timeout_secs),
        })
    }

    /// Load every layer: `.env`, the config file, the environment and the CLI flag.
    pub fn load(config_path: Option<&Path>, cli_url: Option<String>) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => DashboardToml::load(path)?,
            None => match default_config_path() {
                Some(path) => DashboardToml::load_or_default(&path)?,
                None => DashboardToml::default(),
            },
        };
        Self::resolve(&file, env_base_url(), cli_url)
    }
}

/// `BACKEND_API_URL`, after loading `.env` from the working directory.
pub fn env_base_url() -> Option<String> {
    // A missing .env is the common case.
    let _ = dotenvy::dotenv();
    std::env::var(BASE_URL_ENV).ok()
}

/// The explicit `--config` path, else the platform default.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// `<config_dir>/sprintdash/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sprintdash").join("config.toml"))
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
