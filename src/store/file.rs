//! TOML file store.
//!
//! Secrets live in a flat table of `entity = "value"` pairs. Writes go to a
//! sibling temp file which is then renamed over the original, so a crash
//! mid-write leaves the previous contents intact.

use super::{SecretStore, Snapshot, StoreError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    values: Snapshot,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = read_values(&path)?;
        tracing::debug!(path = %path.display(), entries = values.len(), "opened secret store");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_values(path: &Path) -> Result<Snapshot, StoreError> {
    if !path.exists() {
        return Ok(Snapshot::new());
    }
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_values(path: &Path, values: &Snapshot) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let contents = toml::to_string(values)?;
    let tmp = path.with_extension("toml.tmp");
    let mut file = secret_file_options().open(&tmp).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    drop(file);
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

/// Secrets are readable by the owner only.
fn secret_file_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options
}

impl SecretStore for FileStore {
    fn lookup(&self, entity: &str) -> String {
        super::lookup(&self.values, entity).to_string()
    }

    fn snapshot(&self) -> Snapshot {
        self.values.clone()
    }

    /// Re-reads the file before writing so entries added by other
    /// processes since the last poll are kept.
    fn set_value(&mut self, entity: &str, value: &str) -> Result<(), StoreError> {
        let mut next = read_values(&self.path)?;
        next.insert(entity.to_string(), value.to_string());
        write_values(&self.path, &next)?;
        self.values = next;
        tracing::info!(entity, "stored new secret value");
        Ok(())
    }

    fn reload(&mut self) -> Result<bool, StoreError> {
        let values = read_values(&self.path)?;
        if values == self.values {
            return Ok(false);
        }
        self.values = values;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("secrets.toml")).unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.lookup("e1"), "");
    }

    #[test]
    fn test_set_value_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("secrets.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set_value("input_text.email", "p@ss\"word").unwrap();
        assert_eq!(store.lookup("input_text.email"), "p@ss\"word");

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.lookup("input_text.email"), "p@ss\"word");
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_reload_detects_external_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set_value("e1", "old").unwrap();
        assert!(!store.reload().unwrap());

        fs::write(&path, "e1 = \"new\"\ne2 = \"other\"\n").unwrap();
        assert!(store.reload().unwrap());
        assert_eq!(store.lookup("e1"), "new");
        assert_eq!(store.lookup("e2"), "other");
    }

    #[test]
    fn test_set_value_keeps_external_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set_value("e1", "old").unwrap();

        fs::write(&path, "e1 = \"old\"\ne2 = \"external\"\n").unwrap();
        store.set_value("e1", "new").unwrap();
        assert_eq!(store.lookup("e2"), "external");

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.lookup("e1"), "new");
        assert_eq!(reopened.lookup("e2"), "external");
    }

    #[cfg(unix)]
    #[test]
    fn test_secrets_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let mut store = FileStore::open(&path).unwrap();
        store.set_value("e1", "hunter2").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "not valid = = toml").unwrap();
        let err = FileStore::open(&path).err().unwrap();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains("secrets.toml"));
    }

    #[test]
    fn test_failed_write_keeps_old_values() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("secrets.toml");
        let mut store = FileStore::open(&path).unwrap();
        fs::create_dir_all(&path).unwrap();
        assert!(store.set_value("e1", "new").is_err());
        assert_eq!(store.lookup("e1"), "");
    }
}
