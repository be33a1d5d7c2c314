//! Error types for the record store and the data access service.
//!
//! Command handlers work with `anyhow::Result`; everything below them returns
//! [`TrackerError`] so callers can match on [`TrackerError::NotFound`].

use std::fmt;
use thiserror::Error;

/// Entity collections managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Employee,
    Shift,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Employee => write!(f, "Employee"),
            Entity::Shift => write!(f, "Shift"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Break hours must be a finite number, got {0}")]
    InvalidBreakHours(f64),

    #[error("Stored collection '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        TrackerError::NotFound { entity, id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
