//! Employee management commands.
//!
//! Employees are never removed: `deactivate` flips the status to inactive so
//! their shifts and dashboard stay available.

use crate::{
    db::store::RecordStore,
    libs::{
        employee::{EmployeeFilter, EmployeePatch, EmployeeStatus, NewEmployee},
        error::TrackerError,
        messages::Message,
        tracker::TimeTracker,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    #[command(about = "List employees")]
    List {
        #[arg(long, value_enum, help = "Only employees with this status")]
        status: Option<EmployeeStatus>,
        #[arg(long, short, help = "Case-insensitive search in full name")]
        search: Option<String>,
    },
    #[command(about = "Add an employee")]
    Add {
        #[arg(value_parser = parse_non_empty)]
        first_name: String,
        #[arg(value_parser = parse_non_empty)]
        last_name: String,
        #[arg(long, short, value_parser = parse_non_empty)]
        role: String,
        #[arg(long, short, value_parser = parse_email)]
        email: String,
        #[arg(long, short)]
        phone: Option<String>,
        #[arg(long, value_enum, default_value = "active")]
        status: EmployeeStatus,
    },
    #[command(about = "Edit an employee")]
    Edit {
        id: String,
        #[arg(long, value_parser = parse_non_empty)]
        first_name: Option<String>,
        #[arg(long, value_parser = parse_non_empty)]
        last_name: Option<String>,
        #[arg(long, value_parser = parse_non_empty)]
        role: Option<String>,
        #[arg(long, value_parser = parse_email)]
        email: Option<String>,
        #[arg(long, conflicts_with = "clear_phone")]
        phone: Option<String>,
        #[arg(long, help = "Remove the phone number")]
        clear_phone: bool,
        #[arg(long, value_enum)]
        status: Option<EmployeeStatus>,
    },
    #[command(about = "Deactivate an employee")]
    Deactivate {
        id: String,
        #[arg(long, short, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    let tracker = TimeTracker::open()?;

    match args.command {
        EmployeeCommand::List { status, search } => handle_list(&tracker, EmployeeFilter { status, search }),
        EmployeeCommand::Add {
            first_name,
            last_name,
            role,
            email,
            phone,
            status,
        } => handle_add(
            &tracker,
            NewEmployee {
                first_name,
                last_name,
                role,
                email,
                phone,
                status,
            },
        ),
        EmployeeCommand::Edit {
            id,
            first_name,
            last_name,
            role,
            email,
            phone,
            clear_phone,
            status,
        } => {
            let phone = if clear_phone { Some(None) } else { phone.map(Some) };
            let patch = EmployeePatch {
                first_name,
                last_name,
                role,
                email,
                phone,
                status,
            };
            handle_edit(&tracker, &id, patch)
        }
        EmployeeCommand::Deactivate { id, yes } => handle_deactivate(&tracker, &id, yes),
    }
}

fn handle_list<S: RecordStore>(tracker: &TimeTracker<S>, filter: EmployeeFilter) -> Result<()> {
    let employees: Vec<_> = tracker.list_employees()?.into_iter().filter(|e| filter.matches(e)).collect();

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&employees)
}

fn handle_add<S: RecordStore>(tracker: &TimeTracker<S>, fields: NewEmployee) -> Result<()> {
    let employee = tracker.create_employee(fields)?;
    msg_success!(Message::EmployeeCreated(employee.full_name(), employee.id));
    Ok(())
}

fn handle_edit<S: RecordStore>(tracker: &TimeTracker<S>, id: &str, patch: EmployeePatch) -> Result<()> {
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match tracker.update_employee(id, &patch) {
        Ok(employee) => {
            msg_success!(Message::EmployeeUpdated(employee.full_name()));
            Ok(())
        }
        Err(TrackerError::NotFound { .. }) => {
            msg_error!(Message::EmployeeNotFound(id.to_string()));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_deactivate<S: RecordStore>(tracker: &TimeTracker<S>, id: &str, yes: bool) -> Result<()> {
    let employee = match tracker.find_employee(id)? {
        Some(employee) => employee,
        None => {
            msg_error!(Message::EmployeeNotFound(id.to_string()));
            return Ok(());
        }
    };

    if !employee.is_active() {
        msg_info!(Message::EmployeeAlreadyInactive(employee.full_name()));
        return Ok(());
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeactivateEmployee(employee.full_name()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let employee = tracker.deactivate_employee(id)?;
    msg_success!(Message::EmployeeDeactivated(employee.full_name()));
    Ok(())
}

fn parse_non_empty(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(value.to_string())
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
fn parse_email(value: &str) -> Result<String, String> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
                && domain.split('.').count() > 1
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };

    if valid {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a valid email address", value))
    }
}
