//! Output formatting for rooms, bookings and availability.
//!
//! Query results can be shown as a tab-separated table for people or as
//! JSON for scripts. [`OutputFormat::create_formatter`] picks the formatter.

mod formatters;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::availability::Resolution;
use crate::booking::Booking;
use crate::room::Room;
use crate::Result;

pub use crate::config::OutputFormat;
pub use formatters::{format_amount, JsonFormatter, TableFormatter};

/// Renders query results.
pub trait OutputFormatter {
    /// Formats a list of rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_rooms(&self, rooms: &[Room]) -> Result<String>;

    /// Formats a list of bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_bookings(&self, bookings: &[Booking]) -> Result<String>;

    /// Formats one resolved date of a room.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_resolution(&self, room: &Room, resolution: &Resolution) -> Result<String>;

    /// Formats a room's calendar over a range of dates.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_calendar(
        &self,
        room: &Room,
        calendar: &BTreeMap<NaiveDate, Resolution>,
    ) -> Result<String>;
}

impl OutputFormat {
    /// Creates a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::output::OutputFormat;
    ///
    /// let formatter = OutputFormat::Table.create_formatter();
    /// assert_eq!(formatter.format_rooms(&[]).unwrap(), "No rooms.");
    /// ```
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
