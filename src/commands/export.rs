use crate::libs::{
    export::{ExportData, ExportFormat, Exporter},
    tracker::TimeTracker,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "shifts")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tracker = TimeTracker::open()?;
    Exporter::new(args.format, args.data, args.output).export(&tracker)
}
