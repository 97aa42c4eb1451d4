//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cart::DEFAULT_PAYMENT_URL;
use crate::notify::NotificationSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_profile_dir")]
    pub profile_dir: String,
}

fn default_profile_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("brewtopia").to_string_lossy().to_string())
        .unwrap_or_else(|| "./brewtopia_profile".to_string())
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_dir: default_profile_dir(),
        }
    }
}

/// Checkout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_payment_url")]
    pub payment_url: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_payment_url() -> String {
    DEFAULT_PAYMENT_URL.to_string()
}

fn default_currency_symbol() -> String {
    "R".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_url: default_payment_url(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Toast timing and capacity
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default = "default_display_ms")]
    pub display_ms: u64,

    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

fn default_capacity() -> usize {
    5
}

fn default_display_ms() -> u64 {
    3000
}

fn default_exit_ms() -> u64 {
    300
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            display_ms: default_display_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

impl NotificationsConfig {
    pub fn settings(&self) -> NotificationSettings {
        NotificationSettings {
            capacity: self.capacity,
            display_ms: self.display_ms,
            exit_ms: self.exit_ms,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; call [`ConfigDiscovery::log`] once a
    /// subscriber is installed.
    pub fn load_default() -> ConfigDiscovery {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("brewtopia").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover(&candidates)
    }

    /// Load the first of `candidates` that exists and parses, falling back to
    /// defaults with environment overrides
    pub fn discover(candidates: &[PathBuf]) -> ConfigDiscovery {
        let mut skipped = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigDiscovery {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        ConfigDiscovery {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("BREWTOPIA_PROFILE_DIR") {
            self.storage.profile_dir = dir;
        }

        if let Some(url) = lookup("BREWTOPIA_PAYMENT_URL") {
            self.checkout.payment_url = url;
        }
        if let Some(symbol) = lookup("BREWTOPIA_CURRENCY") {
            self.checkout.currency_symbol = symbol;
        }

        if let Some(level) = lookup("BREWTOPIA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BREWTOPIA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Profile directory with a leading `~` expanded
    pub fn profile_dir(&self) -> PathBuf {
        let raw = &self.storage.profile_dir;
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(raw)),
            None => PathBuf::from(raw),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Outcome of searching the default config locations
#[derive(Debug)]
pub struct ConfigDiscovery {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Candidate files that exist but failed to load
    pub skipped: Vec<ConfigError>,
}

impl ConfigDiscovery {
    /// Config read from an explicit path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            config: Config::load_with_env(path)?,
            source: Some(path.to_path_buf()),
            skipped: Vec::new(),
        })
    }

    /// Report what the search found
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("{}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Brewtopia Configuration
#
# Environment variables override these settings:
# - BREWTOPIA_PROFILE_DIR
# - BREWTOPIA_PAYMENT_URL
# - BREWTOPIA_CURRENCY
# - BREWTOPIA_LOG_LEVEL
# - BREWTOPIA_LOG_FORMAT

[storage]
# Directory holding the profile (cart and theme preference)
profile_dir = "~/.local/share/brewtopia"

[checkout]
# Payment page opened on checkout
payment_url = "https://pay.yoco.com/rinae-ramadi"

# Symbol printed before amounts
currency_symbol = "R"

[notifications]
# Maximum number of toasts on screen
capacity = 5

# How long a toast stays visible (ms)
display_ms = 3000

# Length of the slide-out transition (ms)
exit_ms = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
