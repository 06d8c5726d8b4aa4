//! Status command implementation.
//!
//! Shows the effective status of one room on one date, with the source
//! that decided it and any warnings from resolution.

use crate::error::CliError;
use crate::utils::{
    find_room, load_configuration, open_database, parse_date_arg, today, GlobalOptions,
};
use clap::Args;
use innkeep::AvailabilityService;
use std::io::Write;

/// Show a room's effective status on a date.
#[derive(Args)]
pub struct StatusCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    /// Date to resolve (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = match self.date.as_deref() {
            Some(value) => parse_date_arg(value)?,
            None => today(),
        };

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let room = find_room(&db, &self.room)?;

        let resolution = AvailabilityService::new(&db).resolve(&room, date)?;
        let output = config
            .output_format()
            .create_formatter()
            .format_resolution(&room, &resolution)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{output}")?;
        Ok(())
    }
}
