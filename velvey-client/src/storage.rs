//! Persistent key-value slots for cross-view state
//!
//! A redb-backed store holding the last obtained access code and the
//! companion view's "checkout for" list. Writes are best effort: the
//! flow treats storage failures as diagnostics, never as faults.

use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single slots table: key = slot name, value = raw string
const SLOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("slots");

/// Slot for the last obtained access code
const ACCESS_CODE_KEY: &str = "ghostgiver_access_code";

/// Slot for the companion view's recipient list (JSON array)
const CHECKOUT_FOR_KEY: &str = "ghostgiver_checkoutFor";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cross-view slot storage backed by redb
#[derive(Clone)]
pub struct CodeStorage {
    db: Arc<Database>,
}

impl CodeStorage {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table up front so reads never race table creation
        let write_txn = db.begin_write()?;
        {
            write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    /// Last obtained access code, if any view has stored one.
    pub fn access_code(&self) -> StorageResult<Option<String>> {
        self.get(ACCESS_CODE_KEY)
    }

    /// Overwrite the stored access code.
    pub fn set_access_code(&self, code: &str) -> StorageResult<()> {
        self.set(ACCESS_CODE_KEY, code)
    }

    /// The companion view's recipient list; empty when never written.
    pub fn checkout_for(&self) -> StorageResult<Vec<String>> {
        match self.get(CHECKOUT_FOR_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the companion view's recipient list.
    pub fn set_checkout_for(&self, recipients: &[String]) -> StorageResult<()> {
        self.set(CHECKOUT_FOR_KEY, &serde_json::to_string(recipients)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, CodeStorage) {
        let dir = TempDir::new().unwrap();
        let storage = CodeStorage::open(dir.path().join("slots.redb")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_access_code_roundtrip() {
        let (_dir, storage) = open_temp();
        assert_eq!(storage.access_code().unwrap(), None);

        storage.set_access_code("ABC123").unwrap();
        assert_eq!(storage.access_code().unwrap(), Some("ABC123".to_string()));

        // Slot is overwritten, not appended
        storage.set_access_code("XYZ9").unwrap();
        assert_eq!(storage.access_code().unwrap(), Some("XYZ9".to_string()));
    }

    #[test]
    fn test_checkout_for_roundtrip() {
        let (_dir, storage) = open_temp();
        assert!(storage.checkout_for().unwrap().is_empty());

        let recipients = vec!["alice@example.com".to_string(), "bob@example.com".to_string()];
        storage.set_checkout_for(&recipients).unwrap();
        assert_eq!(storage.checkout_for().unwrap(), recipients);
    }

    #[test]
    fn test_slots_are_independent() {
        let (_dir, storage) = open_temp();
        storage.set_access_code("ABC123").unwrap();
        assert!(storage.checkout_for().unwrap().is_empty());
    }
}
