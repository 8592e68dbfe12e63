//! Configuration data model.
//!
//! Loaded from TOML. Every optional field has a default so a config with
//! only `[[apps]]` entries is enough to get going.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub apps: Vec<AppEntry>,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            apps: Vec::new(),
            store: StoreConfig::default(),
            notifications: NotificationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// One application tile, bound to a single secret in the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    /// Display label (e.g. `"Email"`).
    pub name: String,
    /// Key of the secret in the store. Expected to be unique.
    pub entity: String,
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    #[serde(default = "default_true")]
    pub use_numbers: bool,
    #[serde(default = "default_true")]
    pub use_symbols: bool,
}

impl AppEntry {
    pub fn new(name: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity: entity.into(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            use_numbers: true,
            use_symbols: true,
        }
    }
}

/// Backing store location and change polling.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Keep secrets in memory only; nothing is read from or written to disk.
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            poll_interval_secs: default_poll_interval(),
            in_memory: false,
        }
    }
}

/// Status bar toast settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_secs: default_toast_secs(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Password Manager".to_string()
}
fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
fn default_true() -> bool {
    true
}
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passdeck")
        .join("secrets.toml")
}
fn default_poll_interval() -> u64 {
    2
}
fn default_toast_secs() -> u64 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/passdeck/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
