//! The persistence collaborator used by availability queries and mutations.
//!
//! The resolver never talks to storage itself. Services fetch the window of
//! records a query needs through this trait, so every query sees the latest
//! committed writes.

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::{AvailabilityOverride, DateRange};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::Result;
use crate::room::{Room, RoomId, RoomType};

/// Reads and writes the records availability depends on.
///
/// [`crate::Database`] is the production implementation.
#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityStore {
    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn get_room(&self, id: RoomId) -> Result<Option<Room>>;

    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>>;

    /// Lists the overrides for `room_id` with dates inside `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_overrides(&self, room_id: RoomId, range: &DateRange)
        -> Result<Vec<AvailabilityOverride>>;

    /// Lists `confirmed` and `checked_in` bookings of `room_type` whose stay
    /// touches `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_active_bookings(&self, room_type: &RoomType, range: &DateRange)
        -> Result<Vec<Booking>>;

    /// Inserts or replaces the override for its `(room_id, date)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn upsert_override(&mut self, entry: &AvailabilityOverride) -> Result<()>;

    /// Upserts several overrides.
    ///
    /// Implementations backed by a transactional store should apply the
    /// whole batch or nothing; the default writes one entry at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    fn upsert_overrides(&mut self, entries: &[AvailabilityOverride]) -> Result<()> {
        for entry in entries {
            self.upsert_override(entry)?;
        }
        Ok(())
    }

    /// Removes the override for `(room_id, date)`.
    ///
    /// Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn clear_override(&mut self, room_id: RoomId, date: NaiveDate) -> Result<bool>;

    /// Removes the overrides for `room_id` on each of `dates`, returning how
    /// many existed.
    ///
    /// Same atomicity contract as [`AvailabilityStore::upsert_overrides`].
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    fn clear_overrides(&mut self, room_id: RoomId, dates: &[NaiveDate]) -> Result<usize> {
        let mut cleared = 0;
        for date in dates {
            if self.clear_override(room_id, *date)? {
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    /// Sets a booking's status.
    ///
    /// Returns `false` if the booking does not exist. The store performs no
    /// transition checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
        at: DateTime<Utc>,
    ) -> Result<bool>;
}
