pub mod model;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use model::{AppConfig, AppEntry, LoggingConfig};

/// A configured app entry that cannot be rendered as a tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("app #{index} has no name")]
    MissingName { index: usize },
    #[error("app #{index} ({name}) has no entity")]
    MissingEntity { index: usize, name: String },
    #[error("app '{name}' has password_length 0; it must be at least 1")]
    InvalidLength { name: String },
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passdeck")
        .join("config.toml")
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config.store.path = expand_home(&config.store.path);
    validate_apps(&config.apps)
        .with_context(|| format!("Invalid app entry in {}", path.display()))?;
    Ok(config)
}

/// Reject entries that would render a broken tile. Duplicate entities are
/// allowed but logged, since the store lookup would alias them.
pub fn validate_apps(apps: &[AppEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, app) in apps.iter().enumerate() {
        if app.name.trim().is_empty() {
            return Err(ConfigError::MissingName { index });
        }
        if app.entity.trim().is_empty() {
            return Err(ConfigError::MissingEntity {
                index,
                name: app.name.clone(),
            });
        }
        if app.password_length == 0 {
            return Err(ConfigError::InvalidLength {
                name: app.name.clone(),
            });
        }
        if !seen.insert(app.entity.as_str()) {
            tracing::warn!(entity = %app.entity, "entity configured more than once");
        }
    }
    Ok(())
}
