use super::time::{clock_format, shift_hours};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single recorded work period for one employee.
///
/// `employee_id` is not checked against the employee collection; a shift may
/// outlive or predate its employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub employee_id: String,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(with = "clock_format")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_format")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shift {
    /// Elapsed hours between start and end, before break deduction.
    pub fn gross_hours(&self) -> f64 {
        shift_hours(self.start_time, self.end_time)
    }

    pub fn working_hours(&self) -> f64 {
        self.gross_hours() - self.break_hours
    }

    /// Returns a copy with every field set in `patch` overridden.
    pub fn apply(&self, patch: &ShiftPatch) -> Shift {
        Shift {
            id: self.id.clone(),
            employee_id: patch.employee_id.clone().unwrap_or_else(|| self.employee_id.clone()),
            date: patch.date.unwrap_or(self.date),
            start_time: patch.start_time.unwrap_or(self.start_time),
            end_time: patch.end_time.unwrap_or(self.end_time),
            break_hours: patch.break_hours.unwrap_or(self.break_hours),
            notes: patch.notes.clone().unwrap_or_else(|| self.notes.clone()),
        }
    }
}

/// Fields supplied when logging a shift.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShift {
    pub employee_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_hours: f64,
    pub notes: Option<String>,
}

impl NewShift {
    pub fn new(employee_id: &str, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        NewShift {
            employee_id: employee_id.to_string(),
            date,
            start_time,
            end_time,
            break_hours: 0.0,
            notes: None,
        }
    }

    /// Sets the break length in hours. Must be finite: the tracker refuses
    /// NaN and infinities with `TrackerError::InvalidBreakHours`.
    pub fn with_break(mut self, break_hours: f64) -> Self {
        self.break_hours = break_hours;
        self
    }

    pub fn into_shift(self, id: String) -> Shift {
        Shift {
            id,
            employee_id: self.employee_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            break_hours: self.break_hours,
            notes: self.notes,
        }
    }
}

/// Partial update for a shift. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftPatch {
    pub employee_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_hours: Option<f64>,
    pub notes: Option<Option<String>>,
}

impl ShiftPatch {
    pub fn is_empty(&self) -> bool {
        *self == ShiftPatch::default()
    }
}

/// Calendar dates are written as `YYYY-MM-DD`. Full RFC 3339 timestamps,
/// as produced by older exports, are read back as their UTC date.
pub mod date_format {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.naive_utc().date()))
            .map_err(serde::de::Error::custom)
    }
}
