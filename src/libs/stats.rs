//! Per-employee shift statistics.
//!
//! Statistics are derived on every request from the current shift records and
//! are never stored.

use super::shift::Shift;
use serde::{Deserialize, Serialize};

/// Aggregate hours for one employee.
///
/// `total_working_hours` is gross hours minus break hours and is passed
/// through unclamped, so it can go negative when recorded breaks exceed the
/// shift length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub employee_id: String,
    pub total_shifts: usize,
    pub total_shift_hours: f64,
    pub total_working_hours: f64,
    pub total_break_hours: f64,
    /// Working hours per shift, rounded to two decimals. Zero without shifts.
    pub average_work_length: f64,
}

/// Folds the shifts belonging to `employee_id` into [`EmployeeStats`].
///
/// `shifts` may contain records of other employees; they are skipped.
pub fn compute_stats(employee_id: &str, shifts: &[Shift]) -> EmployeeStats {
    let own: Vec<&Shift> = shifts.iter().filter(|s| s.employee_id == employee_id).collect();

    let total_shifts = own.len();
    let total_shift_hours: f64 = own.iter().map(|s| s.gross_hours()).sum();
    let total_break_hours: f64 = own.iter().map(|s| s.break_hours).sum();
    let total_working_hours = total_shift_hours - total_break_hours;

    let average_work_length = if total_shifts > 0 {
        round2(total_working_hours / total_shifts as f64)
    } else {
        0.0
    };

    EmployeeStats {
        employee_id: employee_id.to_string(),
        total_shifts,
        total_shift_hours,
        total_working_hours,
        total_break_hours,
        average_work_length,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
