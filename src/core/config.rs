use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::torrent::TorrentState;
use crate::utils::path::expand_home;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub client: ClientConfig,
    pub remote: RemoteConfig,
    pub pause: PauseConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
    /// Mirror every log line to stdout as well as the log file
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_client_binary")]
    pub binary: String,
    /// Config file handed to the client with `--config`; `~` is expanded
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    pub host: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_mover_path")]
    pub mover_path: String,
    #[serde(default = "default_mover_start_command")]
    pub mover_start_command: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PauseConfig {
    /// Torrents in any of these states are paused before the mover runs
    pub states: Vec<TorrentState>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_tracking_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            path: default_log_path(),
            console: default_console(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            binary: default_client_binary(),
            config: None,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            path: default_tracking_path(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("qbt-mover.log")
}

fn default_console() -> bool {
    true
}

fn default_client_binary() -> String {
    "qbt".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_mover_path() -> String {
    "/usr/local/sbin/mover".to_string()
}

fn default_mover_start_command() -> String {
    "mover start".to_string()
}

fn default_tracking_path() -> PathBuf {
    PathBuf::from("paused_torrents.json")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.client.config = config.client.config.as_deref().map(expand_home);

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if self.logging.path.as_os_str().is_empty() {
            bail!("logging.path must not be empty");
        }

        if self.client.binary.trim().is_empty() {
            bail!("client.binary must not be empty");
        }

        if self.remote.host.trim().is_empty() {
            bail!("remote.host must not be empty");
        }

        if self.remote.connect_timeout_secs == 0 {
            bail!("remote.connect_timeout_secs must be greater than 0");
        }

        if self.remote.mover_path.trim().is_empty() {
            bail!("remote.mover_path must not be empty");
        }

        if self.remote.mover_start_command.trim().is_empty() {
            bail!("remote.mover_start_command must not be empty");
        }

        if self.pause.states.is_empty() {
            bail!("pause.states must list at least one torrent state");
        }

        if self.tracking.path.as_os_str().is_empty() {
            bail!("tracking.path must not be empty");
        }

        Ok(())
    }
}
