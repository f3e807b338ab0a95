//! Configuration loading from a TOML file and environment variables.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::upstream::Credential;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "COINMARKET_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// `stdio` or `http`.
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key_header: String,
    /// Per-call timeout in seconds. `0` disables it.
    pub timeout_secs: u64,
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 8787,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pro-api.coinmarketcap.com/v1".into(),
            api_key_header: "X-CMC_PRO_API_KEY".into(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key_header", &self.api_key_header)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Returns `~/.coinmarket-mcp/`, or a relative `.coinmarket-mcp` without a home directory.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".coinmarket-mcp")
}

/// Returns the default config file path: `~/.coinmarket-mcp/config.toml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

impl AppConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (COINMARKET_API_KEY, COINMARKET_BASE_URL,
    /// COINMARKET_TRANSPORT, COINMARKET_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(API_KEY_ENV) {
            self.upstream.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("COINMARKET_BASE_URL") {
            self.upstream.base_url = val;
        }
        if let Ok(val) = std::env::var("COINMARKET_TRANSPORT") {
            self.server.transport = val;
        }
        if let Ok(val) = std::env::var("COINMARKET_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// The upstream credential. Missing or blank is a fatal startup error.
    pub fn require_credential(&self) -> Result<Credential> {
        match self.upstream.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(Credential::new(key)),
            _ => bail!("Missing {API_KEY_ENV} environment variable"),
        }
    }
}
