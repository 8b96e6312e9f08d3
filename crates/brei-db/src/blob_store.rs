use std::sync::Arc;

use redb::{Database, ReadableTable};

use brei_core::{KvStore, StorageError};

use crate::tables::BLOBS_TABLE;

/// redb implementation of KvStore.
pub struct RedbKvStore {
    db: Arc<Database>,
}

impl RedbKvStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Initialize the database tables.
    pub fn init_tables(db: &Database) -> Result<(), StorageError> {
        let write_txn = db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        {
            let _ = write_txn
                .open_table(BLOBS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(())
    }
}

impl KvStore for RedbKvStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let table = read_txn
            .open_table(BLOBS_TABLE)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        let value = table
            .get(key)
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(value.map(|v| v.value().to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        {
            let mut table = write_txn
                .open_table(BLOBS_TABLE)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::Database(e.to_string()))?;
        }

        write_txn
            .commit()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }
}
