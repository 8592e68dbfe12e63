//! Secret storage.
//!
//! The widget never talks to a store directly. It reads from the latest
//! [`Snapshot`] the host pushed, and asks the host to write through
//! [`manager::StoreManager`], which owns a [`SecretStore`] on a background
//! task and reports results back as events.

pub mod file;
pub mod manager;
pub mod memory;

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Full point-in-time mapping of entity keys to secret values.
pub type Snapshot = BTreeMap<String, String>;

/// Value stored for `entity`, or `""` when the store has none yet.
pub fn lookup<'a>(snapshot: &'a Snapshot, entity: &str) -> &'a str {
    snapshot.get(entity).map(String::as_str).unwrap_or("")
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize secrets: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("store rejected write: {0}")]
    Rejected(String),
    #[error("store task is not running")]
    Closed,
}

/// Backing store for secret values.
pub trait SecretStore: Send {
    fn lookup(&self, entity: &str) -> String;

    fn snapshot(&self) -> Snapshot;

    fn set_value(&mut self, entity: &str, value: &str) -> Result<(), StoreError>;

    /// Pick up changes made outside this process. Returns `true` if the
    /// contents changed.
    fn reload(&mut self) -> Result<bool, StoreError> {
        Ok(false)
    }
}
