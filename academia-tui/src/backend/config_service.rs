//! Configuration service

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use academia_client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Overrides `api_base_url`
pub const ENV_API_URL: &str = "ACADEMIA_API_URL";
/// Overrides `user_id`
pub const ENV_USER_ID: &str = "ACADEMIA_USER_ID";

const CONFIG_FILE: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// REST API base URL
    pub api_base_url: String,
    /// Default caller identity sent as `x-user-id`
    pub user_id: Option<String>,
    /// `es-ES` or `en-US`
    pub language: String,
    pub theme: Theme,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
            language: "es-ES".to_string(),
            theme: Theme::Dark,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply overrides; blank values are ignored
    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, user_id: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(id) = user_id.filter(|v| !v.trim().is_empty()) {
            self.user_id = Some(id.trim().to_string());
        }
        self
    }

    /// Environment variables win over the file
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_USER_ID).ok(),
        )
    }
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    fn load(&self) -> Result<AppConfig>;

    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON file under the platform config directory
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    /// `<config_dir>/academia-tui/config.json`
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("academia-tui");
        Self::with_path(dir.join(CONFIG_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for FileConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for FileConfigService {
    /// A missing file yields the defaults
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
