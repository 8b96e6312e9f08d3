//! Brei DB - redb implementation of the blob store.

pub mod blob_store;
pub mod tables;

pub use blob_store::RedbKvStore;

use std::path::Path;
use std::sync::Arc;

use redb::Database;

use brei_core::StorageError;

/// Initialize a database with all required tables.
pub fn init_database(path: impl AsRef<Path>) -> Result<Arc<Database>, StorageError> {
    let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;

    RedbKvStore::init_tables(&db)?;

    Ok(Arc::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brei_core::{KvStore, RECIPES_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_init_database() {
        let dir = tempdir().unwrap();
        let db = init_database(dir.path().join("test.redb")).unwrap();

        let store = RedbKvStore::new(db);
        assert_eq!(store.get(RECIPES_KEY).unwrap(), None);
    }

    #[test]
    fn test_init_database_twice_keeps_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.redb");

        {
            let store = RedbKvStore::new(init_database(&path).unwrap());
            store.put(RECIPES_KEY, b"{}").unwrap();
        }

        let store = RedbKvStore::new(init_database(&path).unwrap());
        assert_eq!(store.get(RECIPES_KEY).unwrap(), Some(b"{}".to_vec()));
    }
}
