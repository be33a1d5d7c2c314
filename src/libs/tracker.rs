//! Data access service for employees and shifts.
//!
//! [`TimeTracker`] is the only entry point the console uses. It assigns ids,
//! checks that updated records exist, and composes the employee dashboard.
//! It depends on nothing but the [`RecordStore`] trait, so any backend can be
//! injected.
//!
//! Every operation takes the store lock for its whole read-merge-write
//! sequence, which keeps concurrent callers from interleaving writes to the
//! same collection.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiftbook::db::memory::MemoryStore;
//! use shiftbook::libs::employee::NewEmployee;
//! use shiftbook::libs::shift::NewShift;
//! use shiftbook::libs::time::parse_clock_time;
//! use shiftbook::libs::tracker::TimeTracker;
//!
//! let tracker = TimeTracker::new(MemoryStore::new());
//! let ada = tracker.create_employee(NewEmployee::new("Ada", "Lovelace", "Engineer", "ada@example.com"))?;
//! tracker.create_shift(NewShift::new(
//!     &ada.id,
//!     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
//!     parse_clock_time("09:00")?,
//!     parse_clock_time("17:00")?,
//! ))?;
//!
//! let dashboard = tracker.get_employee_dashboard(&ada.id)?;
//! assert_eq!(dashboard.stats.total_shift_hours, 8.0);
//! # Ok::<(), shiftbook::libs::error::TrackerError>(())
//! ```

use super::config::{Config, DEFAULT_RECENT_SHIFTS};
use super::employee::{Employee, EmployeePatch, EmployeeStatus, NewEmployee};
use super::error::{Entity, Result, TrackerError};
use super::id::next_id;
use super::shift::{NewShift, Shift, ShiftPatch};
use super::stats::{compute_stats, EmployeeStats};
use crate::db::records::SqliteStore;
use crate::db::store::RecordStore;
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

/// One employee's profile, statistics and latest shifts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub employee: Employee,
    pub stats: EmployeeStats,
    /// Most recently added shifts, newest first. Ordered by insertion, not by date.
    pub recent_shifts: Vec<Shift>,
}

/// Employee and shift operations over a [`RecordStore`].
///
/// The store is owned behind a mutex; `recent_limit` caps the number of
/// shifts listed on a dashboard.
pub struct TimeTracker<S: RecordStore> {
    store: Mutex<S>,
    recent_limit: usize,
}

impl TimeTracker<SqliteStore> {
    /// Tracker over the configured on-disk store.
    pub fn open() -> anyhow::Result<Self> {
        let dashboard = Config::read()?.dashboard.unwrap_or_default();
        Ok(TimeTracker::new(SqliteStore::new()?).with_recent_limit(dashboard.recent_shifts))
    }
}

impl<S: RecordStore> TimeTracker<S> {
    /// Tracker over `store` with the default dashboard length.
    pub fn new(store: S) -> Self {
        TimeTracker {
            store: Mutex::new(store),
            recent_limit: DEFAULT_RECENT_SHIFTS,
        }
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    /// Gives the store back, e.g. to inspect it after a test.
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    pub fn list_employees(&self) -> Result<Vec<Employee>> {
        self.store.lock().load_employees()
    }

    pub fn find_employee(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.list_employees()?.into_iter().find(|e| e.id == id))
    }

    /// Assigns an unused id and the creation timestamp, then appends.
    pub fn create_employee(&self, fields: NewEmployee) -> Result<Employee> {
        let mut store = self.store.lock();
        let mut employees = store.load_employees()?;

        let id = next_id(employees.iter().map(|e| e.id.as_str()));
        let employee = fields.into_employee(id, Utc::now());
        employees.push(employee.clone());
        store.save_employees(&employees)?;

        debug!(id = %employee.id, "created employee");
        Ok(employee)
    }

    /// Merges `patch` onto the stored employee and persists the result.
    pub fn update_employee(&self, id: &str, patch: &EmployeePatch) -> Result<Employee> {
        let mut store = self.store.lock();
        let mut employees = store.load_employees()?;

        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackerError::not_found(Entity::Employee, id))?;
        *slot = slot.apply(patch);
        let updated = slot.clone();
        store.save_employees(&employees)?;

        debug!(id, "updated employee");
        Ok(updated)
    }

    /// Soft delete: the record stays, with status set to inactive, so its
    /// shifts and dashboard remain available.
    pub fn deactivate_employee(&self, id: &str) -> Result<Employee> {
        self.update_employee(id, &EmployeePatch::status(EmployeeStatus::Inactive))
    }

    /// All shifts in insertion order, or only those of `employee_id`.
    pub fn list_shifts(&self, employee_id: Option<&str>) -> Result<Vec<Shift>> {
        let shifts = self.store.lock().load_shifts()?;
        Ok(match employee_id {
            Some(employee_id) => shifts.into_iter().filter(|s| s.employee_id == employee_id).collect(),
            None => shifts,
        })
    }

    /// Appends a new shift. The employee id is not checked against the
    /// employee collection.
    pub fn create_shift(&self, fields: NewShift) -> Result<Shift> {
        check_break_hours(fields.break_hours)?;
        let mut store = self.store.lock();
        let mut shifts = store.load_shifts()?;

        let id = next_id(shifts.iter().map(|s| s.id.as_str()));
        let shift = fields.into_shift(id);
        shifts.push(shift.clone());
        store.save_shifts(&shifts)?;

        debug!(id = %shift.id, employee_id = %shift.employee_id, "created shift");
        Ok(shift)
    }

    pub fn update_shift(&self, id: &str, patch: &ShiftPatch) -> Result<Shift> {
        let mut store = self.store.lock();
        let mut shifts = store.load_shifts()?;

        let slot = shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| TrackerError::not_found(Entity::Shift, id))?;
        let patched = slot.apply(patch);
        check_break_hours(patched.break_hours)?;
        *slot = patched;
        let updated = slot.clone();
        store.save_shifts(&shifts)?;

        debug!(id, "updated shift");
        Ok(updated)
    }

    /// Hard delete. Removing an unknown id is a no-op.
    pub fn delete_shift(&self, id: &str) -> Result<()> {
        let mut store = self.store.lock();
        let mut shifts = store.load_shifts()?;

        let before = shifts.len();
        shifts.retain(|s| s.id != id);
        if shifts.len() == before {
            debug!(id, "no shift to delete");
            return Ok(());
        }
        store.save_shifts(&shifts)?;

        debug!(id, "deleted shift");
        Ok(())
    }

    /// Profile, statistics and latest shifts of one employee. Fails with
    /// [`TrackerError::NotFound`] for an unknown id, even if shifts reference it.
    pub fn get_employee_dashboard(&self, employee_id: &str) -> Result<Dashboard> {
        let store = self.store.lock();
        let employee = store
            .load_employees()?
            .into_iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| TrackerError::not_found(Entity::Employee, employee_id))?;

        let shifts: Vec<Shift> = store
            .load_shifts()?
            .into_iter()
            .filter(|s| s.employee_id == employee_id)
            .collect();
        let stats = compute_stats(employee_id, &shifts);
        let recent_shifts = shifts.iter().rev().take(self.recent_limit).cloned().collect();

        Ok(Dashboard {
            employee,
            stats,
            recent_shifts,
        })
    }

    /// Statistics for every stored employee, in employee order.
    pub fn list_stats(&self) -> Result<Vec<EmployeeStats>> {
        let store = self.store.lock();
        let shifts = store.load_shifts()?;
        Ok(store
            .load_employees()?
            .iter()
            .map(|e| compute_stats(&e.id, &shifts))
            .collect())
    }

    /// Empties both collections.
    pub fn reset(&self) -> Result<()> {
        self.store.lock().clear_all()
    }
}

// NaN and infinities serialize as `null` and would make the whole shift
// collection unreadable. Negative values are left to the caller.
fn check_break_hours(break_hours: f64) -> Result<()> {
    if break_hours.is_finite() {
        Ok(())
    } else {
        Err(TrackerError::InvalidBreakHours(break_hours))
    }
}
