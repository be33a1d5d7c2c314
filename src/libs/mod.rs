//! Core library modules for shiftbook.
//!
//! ## Features
//!
//! - **Domain Model**: Employees, shifts and derived statistics
//! - **Time Arithmetic**: Clock-time parsing and overnight-aware shift lengths
//! - **Data Access**: The [`tracker::TimeTracker`] service over any record store
//! - **Infrastructure**: Configuration, data directory, errors, messaging
//! - **Presentation**: Console tables, formatting, CSV/JSON export

pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod export;
pub mod formatter;
pub mod id;
pub mod messages;
pub mod shift;
pub mod stats;
pub mod time;
pub mod tracker;
pub mod view;
