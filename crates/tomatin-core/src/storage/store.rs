//! Durable key-value store for the timer snapshot.
//!
//! A single SQLite database holds one JSON record with the slices of timer
//! state that survive a restart (custom modes, statistics, sound, selected
//! mode). A missing or corrupt record hydrates to defaults; that is never an
//! error at this boundary.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::timer::Snapshot;

use super::data_dir;

const SNAPSHOT_KEY: &str = "timer_state";

/// SQLite-backed store, one per data directory.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `<data_dir>/tomatin.db`, creating the schema if
    /// it does not exist yet.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir().map_err(StoreError::DataDir)?.join("tomatin.db");
        Self::open_at(&path)
    }

    /// Open a store at an explicit path. Tests point this at temp dirs.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// In-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
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

    /// Read the persisted snapshot. A missing, unreadable or unparsable
    /// record is treated as absent.
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        let raw = match self.kv_get(SNAPSHOT_KEY) {
            Ok(value) => value?,
            Err(e) => {
                eprintln!("warning: failed to read saved timer state: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                eprintln!("warning: ignoring corrupt timer state: {e}");
                None
            }
        }
    }

    /// Write the snapshot as one JSON record.
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string(snapshot)?;
        self.kv_set(SNAPSHOT_KEY, &json)
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
