//! Transition command implementation.
//!
//! Moves a booking along its lifecycle. Warnings such as an early check-in
//! are logged; with `transitions.enforce_check_in_window` they become errors.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_date_arg, report_execution, start_session, today,
    GlobalOptions,
};
use chrono::Utc;
use clap::Args;
use innkeep::{BookingId, BookingStatus, StatusMutator};

/// Move a booking to a new status.
#[derive(Args)]
pub struct TransitionCommand {
    /// Booking id
    #[arg(value_name = "BOOKING")]
    pub booking: i64,

    /// Target status
    #[arg(value_enum, value_name = "STATUS")]
    pub to: BookingStatus,

    /// Date the transition happens on (default: today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Preview the change without applying it
    #[arg(long)]
    pub dry_run: bool,
}

impl TransitionCommand {
    /// Execute the transition command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let day = match self.today.as_deref() {
            Some(value) => parse_date_arg(value)?,
            None => today(),
        };

        let config = load_configuration(global)?;
        let now = Utc::now();
        let session = start_session(global, &config, now)?;
        let mut db = open_database(global, &config)?;

        let (booking, result) = StatusMutator::new(&mut db)
            .with_enforce_check_in_window(config.enforce_check_in_window())
            .dry_run(self.dry_run)
            .at(now)
            .apply_transition(&session, BookingId::from(self.booking), self.to, day)?;

        report_execution(global, &result);
        if !result.dry_run && !global.quiet {
            println!("Booking {} is now {}", booking.id(), booking.status());
        }
        Ok(())
    }
}
