use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::catalog::DEFAULT_PAGE_SIZE;

/// Prefix for environment overrides, e.g. `POKEVIEW_API__BASE_URL`.
pub const ENV_PREFIX: &str = "POKEVIEW_";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tui: TuiConfig,
    pub data: DataConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the REST API (without trailing slash).
    pub base_url: String,
    /// Number of entries requested by the listing fetch.
    pub page_size: usize,
    /// Per-request timeout in seconds. `None` waits forever.
    pub request_timeout_secs: Option<u64>,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support (card selection, click-outside dismiss).
    pub mouse_enabled: bool,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory (logs live here).
    pub data_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: Some(30),
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/pokeview/config.toml` and
    /// `POKEVIEW_*` environment variables.
    /// Returns `Default` if the result is unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Layer defaults, the TOML file at `path` (if present) and the environment.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            log::info!("Loading config from {}", path.display());
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
        }

        match Self::figment(path).extract() {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to parse config at {}: {e}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("pokeview"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("pokeview").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
