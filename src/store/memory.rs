use super::{SecretStore, Snapshot, StoreError};

/// In-process store, used when no file should be touched and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Snapshot,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(values: Snapshot) -> Self {
        Self {
            values,
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail with [`StoreError::Rejected`].
    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }
}

impl SecretStore for MemoryStore {
    fn lookup(&self, entity: &str) -> String {
        super::lookup(&self.values, entity).to_string()
    }

    fn snapshot(&self) -> Snapshot {
        self.values.clone()
    }

    fn set_value(&mut self, entity: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Rejected(format!("{} is read-only", entity)));
        }
        self.values.insert(entity.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        store.set_value("e1", "abc").unwrap();
        assert_eq!(store.lookup("e1"), "abc");
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_memory_store_rejects_when_failing() {
        let mut store = MemoryStore::default().fail_writes(true);
        let err = store.set_value("e1", "abc").unwrap_err();
        assert_eq!(err.to_string(), "store rejected write: e1 is read-only");
        assert_eq!(store.lookup("e1"), "");
    }
}
