//! SQLite adapter: implementation of `SessionStore`.
//!
//! A single flat `session` table stands in for the browser-local key-value
//! store of the original deployment: string keys, blob values, durable across
//! runs, overwritten in place by reruns.
//!
//! # Mutex Behavior
//!
//! The connection is protected by `Mutex`. A poisoned mutex (from a panic in
//! another thread) will cause a panic. This fail-fast behavior is intentional
//! for data integrity.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::ports::SessionStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Value under {0:?} is not valid UTF-8")]
    NotText(String),
}

/// SQLite-backed session store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at the given database path.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened or initialized.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    ///
    /// # Errors
    /// Returns error if the database cannot be created.
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("Lock failed");

        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS session (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL,
                updated_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("Lock failed");
        let now = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT OR REPLACE INTO session (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )?;

        tracing::debug!(key, len = value.len(), "session key written");
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let conn = self.conn.lock().expect("Lock failed");

        let value = conn
            .query_row(
                "SELECT value FROM session WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;

        Ok(value)
    }
}

impl SessionStore for SqliteStore {
    type Error = StoreError;

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.put(key, value.as_bytes())
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self.fetch(key)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StoreError::NotText(key.to_string())),
            None => Ok(None),
        }
    }

    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        self.put(key, value)
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        self.fetch(key)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let conn = self.conn.lock().expect("Lock failed");
        conn.execute("DELETE FROM session WHERE key = ?1", params![key])?;
        tracing::debug!(key, "session key removed");
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        let conn = self.conn.lock().expect("Lock failed");

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM session WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_roundtrip_and_overwrite() {
        let store = SqliteStore::in_memory().expect("Should create db");

        assert_eq!(store.get("selectedLanguage").expect("Should get"), None);
        assert!(!store.contains("selectedLanguage").expect("Should check"));

        store.set("selectedLanguage", "en").expect("Should set");
        assert_eq!(
            store.get("selectedLanguage").expect("Should get").as_deref(),
            Some("en")
        );

        // Reruns overwrite at the same key.
        store.set("selectedLanguage", "ur").expect("Should set");
        assert_eq!(
            store.get("selectedLanguage").expect("Should get").as_deref(),
            Some("ur")
        );
    }

    #[test]
    fn test_bytes_roundtrip() {
        let store = SqliteStore::in_memory().expect("Should create db");

        let artifact = vec![0u8, 159, 146, 150]; // not valid UTF-8
        store
            .set_bytes("patientPhoto", &artifact)
            .expect("Should set");
        assert_eq!(
            store.get_bytes("patientPhoto").expect("Should get"),
            Some(artifact)
        );

        // Reading a binary value as text is an error, not garbage.
        assert!(store.get("patientPhoto").is_err());
    }

    #[test]
    fn test_remove_deletes_only_its_key() {
        let store = SqliteStore::in_memory().expect("Should create db");
        store.set("phoneNumber", "+92 - 3001234567").expect("set");
        store.set("questionnaireAnswers", "{}").expect("set");

        store.remove("questionnaireAnswers").expect("Should remove");
        assert!(!store.contains("questionnaireAnswers").expect("check"));
        assert!(store.contains("phoneNumber").expect("check"));

        // Removing an absent key is fine.
        store.remove("questionnaireAnswers").expect("Should remove");
    }

    #[test]
    fn test_durable_across_connections() {
        let dir = tempfile::tempdir().expect("Should create tempdir");
        let path = dir.path().join("session.db");

        {
            let store = SqliteStore::new(&path).expect("Should create db");
            store.set("userAge", "above18").expect("Should set");
        }

        let reopened = SqliteStore::new(&path).expect("Should reopen db");
        assert_eq!(
            reopened.get("userAge").expect("Should get").as_deref(),
            Some("above18")
        );
    }
}
