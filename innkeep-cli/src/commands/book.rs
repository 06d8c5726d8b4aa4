//! Booking commands: `book` records a stay, `bookings` lists them.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_amount, parse_date_arg, GlobalOptions,
};
use clap::Args;
use innkeep::output::format_amount;
use innkeep::{Booking, BookingStatus, CustomerId, Database, RoomType};
use std::io::Write;

/// Record a confirmed booking for a room type.
#[derive(Args)]
pub struct BookCommand {
    /// Customer id
    #[arg(long, value_name = "ID")]
    pub customer: i64,

    /// Room type to book
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// First night of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Departure date (YYYY-MM-DD), not itself a night of the stay
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

    /// Number of guests
    #[arg(long, default_value_t = 1)]
    pub guests: u32,

    /// Total price of the stay, e.g. 360.00
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    pub total: String,

    /// Advance already paid
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    pub advance: String,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let room_type = RoomType::new(&self.room_type).map_err(innkeep::Error::from)?;
        let booking = Booking::builder(
            CustomerId::from(self.customer),
            room_type,
            parse_date_arg(&self.check_in)?,
            parse_date_arg(&self.check_out)?,
        )
        .guests(self.guests)
        .total_amount(parse_amount(&self.total)?)
        .advance_paid(parse_amount(&self.advance)?)
        .build()
        .map_err(innkeep::Error::from)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let booking = db.create_booking(&booking)?;

        if !global.quiet {
            println!(
                "Created booking {} for {} from {} to {} ({} nights, balance {})",
                booking.id(),
                booking.room_type(),
                booking.check_in(),
                booking.check_out(),
                booking.nights(),
                format_amount(booking.balance_due())
            );
        }
        Ok(())
    }
}

/// List bookings.
#[derive(Args)]
pub struct BookingsCommand {
    /// Only show bookings with this status
    #[arg(long, value_enum)]
    pub status: Option<BookingStatus>,
}

impl BookingsCommand {
    /// Execute the bookings command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let bookings = Database::list_bookings(db.connection(), self.status)?;
        let output = config
            .output_format()
            .create_formatter()
            .format_bookings(&bookings)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{output}")?;
        Ok(())
    }
}
