//! Display implementation for shiftbook messages.
//!
//! All user-facing text lives here, so commands only ever pick a
//! [`Message`] variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeCreated(name, id) => format!("Employee {} created with ID {}", name, id),
            Message::EmployeeUpdated(name) => format!("Employee {} updated", name),
            Message::EmployeeDeactivated(name) => format!("Employee {} deactivated", name),
            Message::EmployeeAlreadyInactive(name) => format!("Employee {} is already inactive", name),
            Message::EmployeeNotFound(id) => format!("Employee not found: {}", id),
            Message::EmployeesHeader => "Employees:".to_string(),
            Message::NoEmployeesFound => "No employees found".to_string(),
            Message::ConfirmDeactivateEmployee(name) => format!("Are you sure you want to deactivate {}?", name),

            // === SHIFT MESSAGES ===
            Message::ShiftCreated(id) => format!("Shift {} logged", id),
            Message::ShiftUpdated(id) => format!("Shift {} updated", id),
            Message::ShiftDeleted(id) => format!("Shift {} deleted", id),
            Message::ShiftNotFound(id) => format!("Shift not found: {}", id),
            Message::ShiftsHeader => "Shifts:".to_string(),
            Message::NoShiftsFound => "No shifts found".to_string(),
            Message::ConfirmDeleteShift(id) => format!("Are you sure you want to delete shift {}?", id),
            Message::ShiftEmployeeUnknown(id) => format!("No employee with ID {} exists; the shift will be kept as unassigned", id),
            Message::ShiftEmployeeInactive(name) => format!("Employee {} is inactive", name),
            Message::BreakHoursNegative => "Break hours must not be negative".to_string(),
            Message::BreakExceedsShift(break_hours, gross) => {
                format!("Break of {:.2}h is longer than the {:.2}h shift; working hours will be negative", break_hours, gross)
            }

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(name) => format!("Dashboard for {}", name),
            Message::StatsHeader => "Statistics:".to_string(),
            Message::RecentShiftsHeader => "Recent shifts:".to_string(),
            Message::NoRecentShifts => "No shifts recorded yet".to_string(),
            Message::UnknownEmployee => "Unknown".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration removed, defaults will be used".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError(e) => format!("Failed to parse configuration file: {}", e),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleDashboard => "Dashboard settings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === RESET MESSAGES ===
            Message::ConfirmReset => "Delete ALL employees and shifts? This cannot be undone".to_string(),
            Message::DataCleared => "All employees and shifts removed".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDbFile => "Database file name".to_string(),
            Message::PromptRecentShifts => "Shifts listed on the dashboard".to_string(),

            // === GENERAL MESSAGES ===
            Message::NoChangesDetected => "No changes given, nothing to update".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
