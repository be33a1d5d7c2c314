use super::migrations::MigrationManager;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "shiftbook.db";

/// An open SQLite connection with the schema brought up to date.
///
/// Every constructor checks the migration state first, so a `Db` never
/// exposes a connection without the `records` table.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file named in the configuration, inside the
    /// platform data directory.
    pub fn new() -> anyhow::Result<Db> {
        let storage = Config::read()?.storage.unwrap_or_default();
        let db_file_path = DataStorage::new().get_path(&storage.db_file)?;

        Ok(Db::open(db_file_path)?)
    }

    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Db::with_connection(conn)
    }

    /// Private in-memory database, dropped with the connection.
    pub fn in_memory() -> Result<Db> {
        Db::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(mut conn: Connection) -> Result<Db> {
        let manager = MigrationManager::new();
        if manager.needs_migration(&conn)? {
            manager.run_migrations(&mut conn)?;
        }
        Ok(Db { conn })
    }
}
