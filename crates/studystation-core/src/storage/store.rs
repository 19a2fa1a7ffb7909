//! SQLite-backed key-value store.
//!
//! The application mirrors every persisted entity into this store as a
//! JSON string under a fixed key. Keys used by the app: `examName`,
//! `examDate`, `studyTodos`, `myGoals`. Writes are last-writer-wins.

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::StoreError;

/// Durable key to JSON-string mapping.
///
/// Lives at `~/.config/studystation/studystation.db`.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store, creating the file and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(data_dir()?.join("studystation.db"))
    }

    /// Open a store at an explicit path.
    pub fn open_at(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::from)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get the value stored under `key`, or `None` when absent.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set the value under `key`, overwriting any existing entry.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_none() {
        let store = Store::open_memory().unwrap();
        assert!(store.kv_get("examName").unwrap().is_none());
    }

    #[test]
    fn set_then_get() {
        let store = Store::open_memory().unwrap();
        store.kv_set("examName", "\"Finals\"").unwrap();
        assert_eq!(store.kv_get("examName").unwrap().unwrap(), "\"Finals\"");
    }

    #[test]
    fn values_survive_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studystation.db");
        {
            let store = Store::open_at(&path).unwrap();
            store.kv_set("myGoals", "[]").unwrap();
        }
        let store = Store::open_at(&path).unwrap();
        assert_eq!(store.kv_get("myGoals").unwrap().unwrap(), "[]");
    }

    #[test]
    fn overwrite_is_last_writer_wins() {
        let store = Store::open_memory().unwrap();
        store.kv_set("k", "1").unwrap();
        store.kv_set("k", "2").unwrap();
        assert_eq!(store.kv_get("k").unwrap().unwrap(), "2");
    }
}
