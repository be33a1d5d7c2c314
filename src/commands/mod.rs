//! Command-line interface of the shiftbook console.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! entry point. Commands are the presentation layer: they validate input,
//! call [`TimeTracker`](crate::libs::tracker::TimeTracker), and render
//! results or messages.

pub mod dashboard;
pub mod employee;
pub mod export;
pub mod init;
pub mod reset;
pub mod shift;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage employees", arg_required_else_help = true)]
    Employee(employee::EmployeeArgs),
    #[command(about = "Log and manage shifts", arg_required_else_help = true)]
    Shift(shift::ShiftArgs),
    #[command(about = "Show an employee's profile, statistics and recent shifts")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Export employees, shifts or statistics")]
    Export(export::ExportArgs),
    #[command(about = "Remove all employees and shifts")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Shift(args) => shift::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}
