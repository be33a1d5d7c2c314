//! Record store abstraction.
//!
//! The store is a flat key-value mapping. Each entity collection lives under
//! its own stable key as a JSON array and is always read and replaced as a
//! whole: `save_*` overwrites the collection, it never merges.

use crate::libs::employee::Employee;
use crate::libs::error::{Result, TrackerError};
use crate::libs::shift::Shift;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub const EMPLOYEES_KEY: &str = "daphos_employees";
pub const SHIFTS_KEY: &str = "daphos_shifts";

/// Durable key-value storage for the employee and shift collections.
///
/// Implementors provide raw `get`/`set`/`remove`; the typed collection
/// operations are shared. A key that was never written loads as an empty
/// collection, while a value that fails to parse is reported as
/// [`TrackerError::Corrupt`].
pub trait RecordStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    fn load_employees(&self) -> Result<Vec<Employee>> {
        load_collection(self, EMPLOYEES_KEY)
    }

    fn save_employees(&mut self, employees: &[Employee]) -> Result<()> {
        save_collection(self, EMPLOYEES_KEY, employees)
    }

    fn load_shifts(&self) -> Result<Vec<Shift>> {
        load_collection(self, SHIFTS_KEY)
    }

    fn save_shifts(&mut self, shifts: &[Shift]) -> Result<()> {
        save_collection(self, SHIFTS_KEY, shifts)
    }

    /// Resets both collections to empty.
    fn clear_all(&mut self) -> Result<()> {
        self.remove(EMPLOYEES_KEY)?;
        self.remove(SHIFTS_KEY)?;
        debug!("cleared all collections");
        Ok(())
    }
}

fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>>
where
    S: RecordStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Vec::new()),
    };

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| {
        warn!(key, error = %source, "failed to parse stored collection");
        TrackerError::Corrupt {
            key: key.to_string(),
            source,
        }
    })?;
    debug!(key, count = records.len(), "loaded collection");
    Ok(records)
}

fn save_collection<S, T>(store: &mut S, key: &str, records: &[T]) -> Result<()>
where
    S: RecordStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(records)?;
    store.set(key, &raw)?;
    debug!(key, count = records.len(), "saved collection");
    Ok(())
}
