use crate::{
    libs::{error::TrackerError, messages::Message, tracker::TimeTracker, view::View},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Employee ID
    employee_id: String,

    /// Print the dashboard as JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let dashboard = match TimeTracker::open()?.get_employee_dashboard(&args.employee_id) {
        Ok(dashboard) => dashboard,
        Err(TrackerError::NotFound { .. }) => {
            msg_error!(Message::EmployeeNotFound(args.employee_id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        View::dashboard(&dashboard)?;
    }

    Ok(())
}
