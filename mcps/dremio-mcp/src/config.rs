//! Configuration loading for dremio-mcp
//!
//! Configuration is loaded from:
//! 1. A `.env` file in the working directory, if present (the binary loads it
//!    before logging starts; loading again here is a no-op)
//! 2. Environment variable DREMIO_CONFIG_PATH, else ~/.binks/dremio.toml
//! 3. Environment overrides: DREMIO_URL, DREMIO_TOKEN, DREMIO_VERIFY_SSL
//! 4. Default values
//!
//! The base URL and token have no defaults; startup fails without them.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Connection settings
    #[serde(default)]
    pub dremio: DremioConfig,
    /// Job polling and result paging
    #[serde(default)]
    pub query: QuerySettings,
}

/// Dremio connection configuration
#[derive(Clone, Deserialize)]
pub struct DremioConfig {
    /// Base URL, e.g. `https://dremio.example.com:9047`
    #[serde(default)]
    pub url: String,
    /// Personal access token sent as a bearer credential
    #[serde(default)]
    pub token: String,
    /// Verify TLS certificates. Disable only for self-signed test instances.
    #[serde(default = "default_true")]
    pub verify_ssl: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Job polling and paging limits
#[derive(Debug, Clone, Deserialize)]
pub struct QuerySettings {
    /// Wait between job status checks
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Status checks after submission before giving up
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    /// Rows fetched when the caller gives no limit
    #[serde(default = "default_max_rows")]
    pub default_max_rows: u32,
    /// Largest page the results endpoint serves
    #[serde(default = "default_max_rows_cap")]
    pub max_rows_cap: u32,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_max_poll_attempts() -> u32 {
    60
}

fn default_max_rows() -> u32 {
    100
}

fn default_max_rows_cap() -> u32 {
    500
}

impl Default for DremioConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            verify_ssl: default_true(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl fmt::Debug for DremioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DremioConfig")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("verify_ssl", &self.verify_ssl)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl DremioConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            default_max_rows: default_max_rows(),
            max_rows_cap: default_max_rows_cap(),
        }
    }
}

impl QuerySettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Requested row limit (or the default) bounded by the page cap
    pub fn clamp_rows(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_max_rows)
            .min(self.max_rows_cap)
    }
}

impl Config {
    /// Load configuration from file and environment, then validate it
    pub fn load() -> Result<Self> {
        mcp_common::load_env_file();

        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {:?}", path))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {:?}", path))?
            }
            _ => {
                tracing::info!("No config file found, using environment and defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        if !config.dremio.verify_ssl {
            tracing::warn!("TLS certificate verification is disabled (DREMIO_VERIFY_SSL=false)");
        }

        Ok(config)
    }

    /// Overlay environment values onto the loaded config
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("DREMIO_URL") {
            self.dremio.url = url;
        }
        if let Some(token) = var("DREMIO_TOKEN") {
            self.dremio.token = token;
        }
        if let Some(verify) = var("DREMIO_VERIFY_SSL") {
            self.dremio.verify_ssl = parse_flag(&verify);
        }
    }

    /// Reject configs that cannot reach Dremio
    pub fn validate(&self) -> Result<()> {
        let url = self.dremio.url.trim();
        if url.is_empty() {
            bail!("DREMIO_URL is not set; point it at the Dremio base URL (e.g. https://dremio.example.com:9047)");
        }
        url::Url::parse(url).with_context(|| format!("DREMIO_URL is not a valid URL: {}", url))?;

        if self.dremio.token.trim().is_empty() {
            bail!("DREMIO_TOKEN is not set; create a personal access token in Dremio and export it");
        }
        if self.query.max_poll_attempts == 0 {
            bail!("query.max_poll_attempts must be at least 1");
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("DREMIO_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(".binks").join("dremio.toml"))
    }
}

/// Anything except an explicit "off" value counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
