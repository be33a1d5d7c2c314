use super::db::Db;
use super::store::RecordStore;
use crate::libs::error::Result;
use rusqlite::{params, OptionalExtension};
use std::path::Path;

const SELECT_VALUE: &str = "SELECT value FROM records WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO records (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP";
const DELETE_VALUE: &str = "DELETE FROM records WHERE key = ?1";

/// Record store persisted in the local SQLite database.
///
/// Every collection is one row of the `records` table, so a save is a single
/// upsert statement: the collection is either fully replaced or untouched.
pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { db: Db::new()? })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self { db: Db::open(path)? })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self { db: Db::in_memory()? })
    }
}

impl From<Db> for SqliteStore {
    fn from(db: Db) -> Self {
        Self { db }
    }
}

impl RecordStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .db
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.db.conn.execute(DELETE_VALUE, params![key])?;
        Ok(())
    }
}
