//! SQLite settings backend with in-memory cache.

use std::path::Path;
use std::sync::Mutex;

use dashmap::DashMap;
use rusqlite::Connection;

use super::{SettingsBackend, SettingsError};

/// SQLite-backed settings storage with DashMap cache.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Create a new SQLite backend at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Create a backend on an in-memory database.
    pub fn in_memory() -> Result<Self, SettingsError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, SettingsError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // Recover the connection if a previous holder panicked.
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SettingsBackend for SqliteBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        // Check cache first
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        // Cache miss - query DB
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        let mut rows = stmt.query([key])?;
        let result = match rows.next()? {
            Some(row) => Some(row.get::<_, Vec<u8>>(0)?),
            None => None,
        };

        // Populate cache
        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        self.conn().execute(
            "INSERT INTO settings (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, &value],
        )?;

        // Update cache
        self.cache.insert(key.to_string(), value);

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.conn()
            .execute("DELETE FROM settings WHERE key = ?", [key])?;

        // Remove from cache
        self.cache.remove(key);

        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let pattern = format!("{}%", prefix);
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT key FROM settings WHERE key LIKE ?")?;
        let rows = stmt.query_map([&pattern], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(SettingsError::from)
    }
}
