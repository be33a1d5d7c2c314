//! Export of employees, shifts and statistics to CSV or JSON files.
//!
//! JSON output uses the same camelCase records the store persists. CSV output
//! flattens each record into one row with a header line.

use super::employee::Employee;
use super::formatter::{format_clock, format_hours};
use super::messages::Message;
use super::shift::Shift;
use super::stats::EmployeeStats;
use super::tracker::TimeTracker;
use crate::db::store::RecordStore;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Employees,
    Shifts,
    /// Per-employee statistics
    Stats,
}

/// Writes one data set in one format to a single file.
///
/// The data set is fixed at construction, so the default file name always
/// describes what the file holds.
pub struct Exporter {
    format: ExportFormat,
    data: ExportData,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `shiftbook_<data>_<timestamp>.<ext>`
    /// in the current directory.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let data_name = match data {
            ExportData::Employees => "employees",
            ExportData::Shifts => "shifts",
            ExportData::Stats => "stats",
        };

        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "shiftbook_{}_{}.{}",
                data_name,
                Local::now().format("%Y%m%d_%H%M%S"),
                extension
            ))
        });

        Self {
            format,
            data,
            output_path,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn data(&self) -> ExportData {
        self.data
    }

    /// Reads the data set from `tracker` and writes the file.
    pub fn export<S: RecordStore>(&self, tracker: &TimeTracker<S>) -> Result<()> {
        match self.data {
            ExportData::Employees => {
                let employees = tracker.list_employees()?;
                match self.format {
                    ExportFormat::Csv => self.export_employees_csv(&employees)?,
                    ExportFormat::Json => self.write_json(&employees)?,
                }
            }
            ExportData::Shifts => {
                let shifts = tracker.list_shifts(None)?;
                match self.format {
                    ExportFormat::Csv => self.export_shifts_csv(&shifts)?,
                    ExportFormat::Json => self.write_json(&shifts)?,
                }
            }
            ExportData::Stats => {
                let stats = tracker.list_stats()?;
                match self.format {
                    ExportFormat::Csv => self.export_stats_csv(&stats)?,
                    ExportFormat::Json => self.write_json(&stats)?,
                }
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize>(&self, records: &[T]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, records)?;
        Ok(())
    }

    fn export_employees_csv(&self, employees: &[Employee]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "First Name", "Last Name", "Role", "Email", "Phone", "Status", "Created At"])?;

        for e in employees {
            wtr.write_record([
                e.id.clone(),
                e.first_name.clone(),
                e.last_name.clone(),
                e.role.clone(),
                e.email.clone(),
                e.phone.clone().unwrap_or_default(),
                e.status.to_string(),
                e.created_at.to_rfc3339(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_shifts_csv(&self, shifts: &[Shift]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "ID",
            "Employee ID",
            "Date",
            "Start",
            "End",
            "Break Hours",
            "Shift Hours",
            "Working Hours",
            "Notes",
        ])?;

        for s in shifts {
            wtr.write_record([
                s.id.clone(),
                s.employee_id.clone(),
                s.date.format("%Y-%m-%d").to_string(),
                format_clock(s.start_time),
                format_clock(s.end_time),
                s.break_hours.to_string(),
                format_hours(s.gross_hours()),
                format_hours(s.working_hours()),
                s.notes.clone().unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_stats_csv(&self, stats: &[EmployeeStats]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record([
            "Employee ID",
            "Total Shifts",
            "Total Shift Hours",
            "Total Working Hours",
            "Total Break Hours",
            "Average Work Length",
        ])?;

        for s in stats {
            wtr.write_record([
                s.employee_id.clone(),
                s.total_shifts.to_string(),
                format_hours(s.total_shift_hours),
                format_hours(s.total_working_hours),
                format_hours(s.total_break_hours),
                format_hours(s.average_work_length),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
