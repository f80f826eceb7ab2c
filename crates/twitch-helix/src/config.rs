use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_NAME: &str = "twitch-helix";
const CONFIG_FILE: &str = "config.json";

/// Default Helix endpoint
pub const HELIX_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Retry behavior for responses whose body is not valid JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first request
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed delay between attempts, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    300
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// Returns the delay between attempts
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `Client-ID` header
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth token sent as `Authorization: Bearer ...` when set
    #[serde(default)]
    pub access_token: Option<String>,
    /// Disables TLS certificate validation. Only meant for debugging proxies.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default)]
    pub retry: RetryConfig,
}

fn default_base_url() -> String {
    HELIX_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            access_token: None,
            accept_invalid_certs: false,
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given client ID and defaults elsewhere
    pub fn with_client_id(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&data).context("Failed to parse config file")
    }

    /// Loads the configuration from the user config directory,
    /// falling back to defaults when no file exists
    pub fn load_default() -> Result<Self> {
        let config_file = Self::config_dir()?.join(CONFIG_FILE);

        if config_file.exists() {
            Self::load(&config_file)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_NAME))
    }
}
