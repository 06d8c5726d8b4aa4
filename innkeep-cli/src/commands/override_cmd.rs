//! Override commands.
//!
//! An override states a room's status on a date regardless of bookings.
//! Setting one over a live booking is allowed and reported as a warning.

use crate::error::CliError;
use crate::utils::{
    date_range_args, find_room, load_configuration, open_database, report_execution,
    start_session, GlobalOptions,
};
use chrono::Utc;
use clap::{Args, Subcommand};
use innkeep::{RoomStatus, StatusMutator};

/// Set or clear availability overrides.
#[derive(Args)]
pub struct OverrideCommand {
    #[command(subcommand)]
    pub action: OverrideAction,
}

/// Override subcommands.
#[derive(Subcommand)]
pub enum OverrideAction {
    /// Pin a room's status on one or more dates
    Set(OverrideSetArgs),

    /// Remove overrides, returning dates to inferred status
    Clear(OverrideClearArgs),
}

/// Date selection shared by both override subcommands.
#[derive(Args)]
pub struct DateSelection {
    /// Single date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with_all = ["from", "to"])]
    pub date: Option<String>,

    /// First date of an inclusive range
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last date of an inclusive range
    #[arg(long, value_name = "DATE", requires = "from")]
    pub to: Option<String>,
}

/// Arguments for `override set`.
#[derive(Args)]
pub struct OverrideSetArgs {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    /// Status to pin
    #[arg(value_enum, value_name = "STATUS")]
    pub status: RoomStatus,

    #[command(flatten)]
    pub dates: DateSelection,

    /// Free-form reason stored with the override
    #[arg(long)]
    pub notes: Option<String>,

    /// Preview the change without applying it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `override clear`.
#[derive(Args)]
pub struct OverrideClearArgs {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    #[command(flatten)]
    pub dates: DateSelection,

    /// Preview the change without applying it
    #[arg(long)]
    pub dry_run: bool,
}

impl OverrideCommand {
    /// Execute the override command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let now = Utc::now();
        let session = start_session(global, &config, now)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            OverrideAction::Set(args) => {
                let dates = date_range_args(
                    args.dates.date.as_deref(),
                    args.dates.from.as_deref(),
                    args.dates.to.as_deref(),
                )?;
                let room = find_room(&db, &args.room)?;

                let result = StatusMutator::new(&mut db)
                    .with_max_range_days(config.max_range_days())
                    .dry_run(args.dry_run)
                    .at(now)
                    .set_override_range(&session, room.id(), dates, args.status, args.notes)?;

                report_execution(global, &result);
                if !result.dry_run && !global.quiet {
                    println!(
                        "Set room {} to {} for {dates}",
                        room.room_number(),
                        args.status
                    );
                }
            }
            OverrideAction::Clear(args) => {
                let dates = date_range_args(
                    args.dates.date.as_deref(),
                    args.dates.from.as_deref(),
                    args.dates.to.as_deref(),
                )?;
                let room = find_room(&db, &args.room)?;

                let result = StatusMutator::new(&mut db)
                    .with_max_range_days(config.max_range_days())
                    .dry_run(args.dry_run)
                    .at(now)
                    .clear_override_range(&session, room.id(), dates)?;

                report_execution(global, &result);
                if !result.dry_run && !global.quiet {
                    println!(
                        "Cleared {} override(s) for room {} in {dates}",
                        result.actions_taken.len(),
                        room.room_number()
                    );
                }
            }
        }

        Ok(())
    }
}
