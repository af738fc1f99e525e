use recruitai_api::{ClientOptions, RetryConfig, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::settings::Settings;

/// Main configuration structure
///
/// Loaded from the config file, then overridden by env vars and CLI args.
/// Priority: CLI > Env > File > Defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, defaults if there is none yet
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.settings = config.settings.normalized();
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// XDG config dir on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("recruitai");

        Ok(config_dir.join("config.toml"))
    }

    /// CLI flag or RECRUITAI_API_URL beats the file
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api.base_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            retry: RetryConfig::with_max_retries(self.api.max_retries),
            max_upload_bytes: self.api.max_upload_mb.saturating_mul(1024 * 1024),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the screening API, including the `/api` prefix
    #[serde(default = "default_api_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries for GET requests; 0 keeps the single-shot behaviour
    #[serde(default)]
    pub max_retries: u32,

    #[serde(default = "default_max_upload")]
    pub max_upload_mb: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_upload() -> u64 {
    16
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: default_timeout(),
            max_retries: 0,
            max_upload_mb: default_max_upload(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How often the dashboard wakes up to collect finished requests
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Open the help popup on first launch
    #[serde(default)]
    pub show_help_on_start: bool,
}

fn default_tick_rate() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_help_on_start: false,
        }
    }
}
