//! Calendar command implementation.

use crate::error::CliError;
use crate::utils::{
    find_room, load_configuration, open_database, parse_date_arg, today, GlobalOptions,
};
use chrono::Duration;
use clap::Args;
use innkeep::{AvailabilityService, DateRange};
use std::io::Write;

/// Show a room's status for every date of a range.
#[derive(Args)]
pub struct CalendarCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    /// First date (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last date, inclusive
    #[arg(long, value_name = "DATE", conflicts_with = "days")]
    pub to: Option<String>,

    /// Number of days to show
    #[arg(long, value_name = "N", default_value_t = 14)]
    pub days: u32,
}

impl CalendarCommand {
    fn range(&self) -> Result<DateRange, CliError> {
        let start = match self.from.as_deref() {
            Some(value) => parse_date_arg(value)?,
            None => today(),
        };
        let end = match self.to.as_deref() {
            Some(value) => parse_date_arg(value)?,
            None => {
                if self.days == 0 {
                    return Err(CliError::InvalidArguments(
                        "--days must be at least 1".to_string(),
                    ));
                }
                start
                    .checked_add_signed(Duration::days(i64::from(self.days) - 1))
                    .ok_or_else(|| innkeep::Error::InvalidDate {
                        value: format!("{start} + {} days", self.days),
                        reason: "range end is past the last representable date".to_string(),
                    })?
            }
        };
        Ok(DateRange::new(start, end)?)
    }

    /// Execute the calendar command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = self.range()?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let room = find_room(&db, &self.room)?;

        let calendar = AvailabilityService::new(&db)
            .with_max_range_days(config.max_range_days())
            .resolve_range(&room, &range)?;
        let output = config
            .output_format()
            .create_formatter()
            .format_calendar(&room, &calendar)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{output}")?;
        Ok(())
    }
}
