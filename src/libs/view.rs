use super::employee::Employee;
use super::formatter::{format_clock, format_duration, format_hours};
use super::messages::Message;
use super::shift::Shift;
use super::stats::EmployeeStats;
use super::tracker::Dashboard;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

/// Console table rendering. Stateless; every method prints straight to stdout.
pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ROLE", "EMAIL", "PHONE", "STATUS"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.full_name(),
                employee.role,
                employee.email,
                employee.phone.as_deref().unwrap_or("-"),
                employee.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Shift table. `employees` resolves owner names; missing owners show as unknown.
    pub fn shifts(shifts: &[Shift], employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE", "DATE", "START", "END", "HOURS", "BREAK", "WORKED", "NOTES"]);
        for shift in shifts {
            let owner = employees
                .iter()
                .find(|e| e.id == shift.employee_id)
                .map(|e| e.full_name())
                .unwrap_or_else(|| Message::UnknownEmployee.to_string());
            table.add_row(row![
                shift.id,
                owner,
                shift.date.format("%Y-%m-%d"),
                format_clock(shift.start_time),
                format_clock(shift.end_time),
                format_duration(shift.gross_hours()),
                format_hours(shift.break_hours),
                format_duration(shift.working_hours()),
                shift.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &EmployeeStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SHIFTS", "SHIFT HOURS", "WORKING HOURS", "BREAK HOURS", "AVERAGE"]);
        table.add_row(row![
            stats.total_shifts,
            format_hours(stats.total_shift_hours),
            format_hours(stats.total_working_hours),
            format_hours(stats.total_break_hours),
            format_hours(stats.average_work_length)
        ]);
        table.printstd();

        Ok(())
    }

    /// Profile, statistics and recent shifts as three titled tables.
    pub fn dashboard(dashboard: &Dashboard) -> Result<()> {
        let employee = &dashboard.employee;
        msg_print!(Message::DashboardHeader(employee.full_name()), true);
        View::employees(std::slice::from_ref(employee))?;

        msg_print!(Message::StatsHeader, true);
        View::stats(&dashboard.stats)?;

        msg_print!(Message::RecentShiftsHeader, true);
        if dashboard.recent_shifts.is_empty() {
            msg_print!(Message::NoRecentShifts);
        } else {
            View::shifts(&dashboard.recent_shifts, std::slice::from_ref(employee))?;
        }

        Ok(())
    }
}
