//! Persistence layer for shiftbook.
//!
//! Employees and shifts are kept as two whole collections in a key-value
//! record store. The store is a trait so the service can run against SQLite
//! on disk or an in-memory map.
//!
//! ```rust
//! use shiftbook::db::memory::MemoryStore;
//! use shiftbook::db::store::RecordStore;
//!
//! let store = MemoryStore::new();
//! assert!(store.load_employees()?.is_empty());
//! # Ok::<(), shiftbook::libs::error::TrackerError>(())
//! ```

/// SQLite connection setup.
pub mod db;

/// In-memory record store.
pub mod memory;

/// Versioned schema migrations.
pub mod migrations;

/// SQLite-backed record store.
pub mod records;

/// The record store trait and the typed collection operations.
pub mod store;
