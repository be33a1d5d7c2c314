//! Shift logging commands.

use crate::{
    db::store::RecordStore,
    libs::{
        employee::{EmployeeFilter, EmployeeStatus},
        error::TrackerError,
        messages::Message,
        shift::{NewShift, ShiftPatch},
        time::{parse_clock_time, shift_hours},
        tracker::TimeTracker,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ShiftArgs {
    #[command(subcommand)]
    command: ShiftCommand,
}

#[derive(Debug, Subcommand)]
enum ShiftCommand {
    #[command(about = "List shifts")]
    List {
        #[arg(long, short, help = "Only shifts of this employee ID")]
        employee: Option<String>,
        #[arg(long, value_enum, help = "Only shifts whose employee has this status")]
        status: Option<EmployeeStatus>,
        #[arg(long, short, help = "Case-insensitive search in the employee's full name")]
        search: Option<String>,
    },
    #[command(about = "Log a shift")]
    Add {
        employee_id: String,
        #[arg(long, short, default_value = "today", value_parser = parse_date, help = "Shift date (YYYY-MM-DD or 'today')")]
        date: NaiveDate,
        #[arg(long, short, value_parser = parse_time, help = "Start time (HH:MM)")]
        start: NaiveTime,
        #[arg(long, short = 'E', value_parser = parse_time, help = "End time (HH:MM), may be past midnight")]
        end: NaiveTime,
        #[arg(long, short, default_value_t = 0.0, value_parser = parse_break_hours, help = "Break hours")]
        break_hours: f64,
        #[arg(long, short)]
        notes: Option<String>,
    },
    #[command(about = "Edit a shift")]
    Edit {
        id: String,
        #[arg(long)]
        employee: Option<String>,
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
        #[arg(long, value_parser = parse_break_hours)]
        break_hours: Option<f64>,
        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        #[arg(long, help = "Remove the notes")]
        clear_notes: bool,
    },
    #[command(about = "Delete a shift")]
    Delete {
        id: String,
        #[arg(long, short, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub fn cmd(args: ShiftArgs) -> Result<()> {
    let tracker = TimeTracker::open()?;

    match args.command {
        ShiftCommand::List { employee, status, search } => {
            handle_list(&tracker, employee.as_deref(), EmployeeFilter { status, search })
        }
        ShiftCommand::Add {
            employee_id,
            date,
            start,
            end,
            break_hours,
            notes,
        } => handle_add(
            &tracker,
            NewShift {
                employee_id,
                date,
                start_time: start,
                end_time: end,
                break_hours,
                notes,
            },
        ),
        ShiftCommand::Edit {
            id,
            employee,
            date,
            start,
            end,
            break_hours,
            notes,
            clear_notes,
        } => {
            let notes = if clear_notes { Some(None) } else { notes.map(Some) };
            let patch = ShiftPatch {
                employee_id: employee,
                date,
                start_time: start,
                end_time: end,
                break_hours,
                notes,
            };
            handle_edit(&tracker, &id, patch)
        }
        ShiftCommand::Delete { id, yes } => handle_delete(&tracker, &id, yes),
    }
}

fn handle_list<S: RecordStore>(tracker: &TimeTracker<S>, employee_id: Option<&str>, filter: EmployeeFilter) -> Result<()> {
    let employees = tracker.list_employees()?;
    let shifts: Vec<_> = tracker
        .list_shifts(employee_id)?
        .into_iter()
        .filter(|s| filter.matches_owner(employees.iter().find(|e| e.id == s.employee_id)))
        .collect();

    if shifts.is_empty() {
        msg_info!(Message::NoShiftsFound);
        return Ok(());
    }

    msg_print!(Message::ShiftsHeader, true);
    View::shifts(&shifts, &employees)
}

fn handle_add<S: RecordStore>(tracker: &TimeTracker<S>, fields: NewShift) -> Result<()> {
    match tracker.find_employee(&fields.employee_id)? {
        Some(employee) if !employee.is_active() => {
            msg_error!(Message::ShiftEmployeeInactive(employee.full_name()));
            return Ok(());
        }
        Some(_) => {}
        None => msg_warning!(Message::ShiftEmployeeUnknown(fields.employee_id.clone())),
    }

    warn_if_break_exceeds(fields.start_time, fields.end_time, fields.break_hours);

    let shift = tracker.create_shift(fields)?;
    msg_success!(Message::ShiftCreated(shift.id));
    Ok(())
}

fn handle_edit<S: RecordStore>(tracker: &TimeTracker<S>, id: &str, patch: ShiftPatch) -> Result<()> {
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match tracker.update_shift(id, &patch) {
        Ok(shift) => {
            warn_if_break_exceeds(shift.start_time, shift.end_time, shift.break_hours);
            msg_success!(Message::ShiftUpdated(shift.id));
            Ok(())
        }
        Err(TrackerError::NotFound { .. }) => {
            msg_error!(Message::ShiftNotFound(id.to_string()));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_delete<S: RecordStore>(tracker: &TimeTracker<S>, id: &str, yes: bool) -> Result<()> {
    if !tracker.list_shifts(None)?.iter().any(|s| s.id == id) {
        msg_error!(Message::ShiftNotFound(id.to_string()));
        return Ok(());
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteShift(id.to_string()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    tracker.delete_shift(id)?;
    msg_success!(Message::ShiftDeleted(id.to_string()));
    Ok(())
}

// Negative working hours are kept as recorded; the operator is only warned.
fn warn_if_break_exceeds(start: NaiveTime, end: NaiveTime, break_hours: f64) {
    let gross = shift_hours(start, end);
    if break_hours > gross {
        msg_warning!(Message::BreakExceedsShift(break_hours, gross));
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| format!("'{}': {}", value, e))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    parse_clock_time(value).map_err(|e| e.to_string())
}

fn parse_break_hours(value: &str) -> Result<f64, String> {
    let hours: f64 = value.trim().parse().map_err(|_| format!("'{}' is not a number", value))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(Message::BreakHoursNegative.to_string());
    }
    Ok(hours)
}
