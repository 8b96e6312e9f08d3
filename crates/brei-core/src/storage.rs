use crate::error::StorageError;

/// Key under which the full recipe mapping is persisted.
pub const RECIPES_KEY: &str = "rezepte";

/// Trait for a key-value store holding named blobs.
pub trait KvStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob stored under `key`.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

// In-memory implementation for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::RwLock;

    /// In-memory blob store for testing.
    ///
    /// Writes can be switched off to behave like a full or unavailable backend.
    #[derive(Default)]
    pub struct InMemoryKvStore {
        blobs: RwLock<HashMap<String, Vec<u8>>>,
        reject_writes: AtomicBool,
    }

    impl InMemoryKvStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a store that already holds `value` under `key`.
        pub fn with_blob(key: &str, value: impl Into<Vec<u8>>) -> Self {
            let store = Self::new();
            store
                .blobs
                .write()
                .unwrap()
                .insert(key.to_string(), value.into());
            store
        }

        pub fn set_reject_writes(&self, reject: bool) {
            self.reject_writes.store(reject, Ordering::SeqCst);
        }

        /// Raw access to a stored blob, bypassing the trait.
        pub fn blob(&self, key: &str) -> Option<Vec<u8>> {
            self.blobs.read().unwrap().get(key).cloned()
        }
    }

    impl KvStore for InMemoryKvStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            Ok(self.blobs.read().unwrap().get(key).cloned())
        }

        fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
            if self.reject_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Database("quota exceeded".to_string()));
            }
            self.blobs
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_put_and_get() {
            let store = InMemoryKvStore::new();
            assert_eq!(store.get("rezepte").unwrap(), None);

            store.put("rezepte", b"{}").unwrap();
            assert_eq!(store.get("rezepte").unwrap(), Some(b"{}".to_vec()));
        }

        #[test]
        fn test_rejected_write_keeps_old_value() {
            let store = InMemoryKvStore::with_blob("rezepte", "{}");
            store.set_reject_writes(true);

            assert!(store.put("rezepte", b"[]").is_err());
            assert_eq!(store.blob("rezepte"), Some(b"{}".to_vec()));
        }
    }
}
