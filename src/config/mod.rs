//! Configuration management for the shell itself
//!
//! These are application settings (paths, history, logging, display), not the
//! network configuration being edited; that lives in [`crate::store`].
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (TOML)
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Network configuration file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Settings for applying configuration to the host
    #[serde(default)]
    pub system: SystemConfig,
}

/// Where the network configuration documents live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Configuration loaded at startup
    #[serde(default = "default_boot_config")]
    pub boot_config: PathBuf,

    /// Copy of the configuration last saved
    #[serde(default = "default_running_config")]
    pub running_config: PathBuf,

    /// Directory for `backup` snapshots
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Enable syntax highlighting of the input line
    #[serde(default = "default_syntax_highlighting")]
    pub syntax_highlighting: bool,

    /// Prompt text
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

/// Command history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Host apply settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Resolver file written on commit
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: PathBuf,

    /// Prefix service and route commands with `sudo`
    #[serde(default = "default_use_sudo")]
    pub use_sudo: bool,
}

// Default value functions
fn default_boot_config() -> PathBuf {
    PathBuf::from("boot.config.yaml")
}

fn default_running_config() -> PathBuf {
    PathBuf::from("running.config.yaml")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("backup")
}

fn default_color_output() -> bool {
    true
}

fn default_syntax_highlighting() -> bool {
    true
}

fn default_prompt() -> String {
    "(config)# ".to_string()
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".nehv_configure_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

fn default_resolv_conf() -> PathBuf {
    PathBuf::from("/etc/resolv.conf")
}

fn default_use_sudo() -> bool {
    true
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            boot_config: default_boot_config(),
            running_config: default_running_config(),
            backup_dir: default_backup_dir(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            syntax_highlighting: default_syntax_highlighting(),
            prompt: default_prompt(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            use_sudo: default_use_sudo(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.display().to_string()).into()
            } else {
                crate::error::ConfigureError::Io(e)
            }
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading settings");
        Self::from_file(&path)
    }

    /// Apply environment overrides.
    ///
    /// `RESOLV_CONF` replaces the resolver file path.
    pub fn apply_env(&mut self) {
        if let Some(path) = std::env::var_os("RESOLV_CONF") {
            self.system.resolv_conf = PathBuf::from(path);
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".configure")
            .join("config.toml")
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(invalid("history.max_size", "0"));
        }
        if self.display.prompt.trim().is_empty() {
            return Err(invalid("display.prompt", &self.display.prompt));
        }
        for (field, path) in [
            ("paths.boot_config", &self.paths.boot_config),
            ("paths.running_config", &self.paths.running_config),
            ("system.resolv_conf", &self.system.resolv_conf),
        ] {
            if path.as_os_str().is_empty() {
                return Err(invalid(field, ""));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> crate::error::ConfigureError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
