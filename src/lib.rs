//! # Shiftbook - employee time-tracking console
//!
//! A command-line utility for keeping employee records, logging work shifts,
//! and reporting per-employee hours, break time and shift counts.
//!
//! ## Features
//!
//! - **Employee Records**: Create, edit and deactivate employees
//! - **Shift Log**: Record shifts with start/end clock times and breaks, including overnight spans
//! - **Statistics**: Gross hours, working hours, break hours and average shift length
//! - **Dashboard**: Employee profile, statistics and most recent shifts in one view
//! - **Data Export**: Export employees, shifts and statistics to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
