//! Store-backed availability queries.
//!
//! Each query fetches a fresh snapshot of the overrides and bookings it
//! needs, restricted to the queried window, and resolves it. Nothing is
//! cached between calls, so a mutation is visible to the very next query.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::availability::{
    AvailabilityOverride, AvailabilityResolver, DateRange, Resolution, RoomStatus,
};
use crate::booking::Booking;
use crate::error::Result;
use crate::room::Room;
use crate::store::AvailabilityStore;

/// Default limit on the number of dates one range query may span.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

/// Answers availability questions against a store.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use innkeep::{AvailabilityService, Database, DatabaseConfig, RoomStatus};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
/// let room = Database::get_room_by_number(db.connection(), "R101").unwrap().unwrap();
///
/// let service = AvailabilityService::new(&db);
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let status = service.effective_status(&room, date).unwrap();
/// println!("{} on {date}: {status}", room.room_number());
/// ```
pub struct AvailabilityService<'s, S: AvailabilityStore + ?Sized> {
    store: &'s S,
    max_range_days: u32,
}

impl<'s, S: AvailabilityStore + ?Sized> AvailabilityService<'s, S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self {
            store,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }

    /// Sets the longest range a single query may span.
    #[must_use]
    pub const fn with_max_range_days(mut self, days: u32) -> Self {
        self.max_range_days = days;
        self
    }

    /// Returns the effective status of `room` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn effective_status(&self, room: &Room, date: NaiveDate) -> Result<RoomStatus> {
        Ok(self.resolve(room, date)?.status)
    }

    /// Resolves `room` on `date` with provenance and warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn resolve(&self, room: &Room, date: NaiveDate) -> Result<Resolution> {
        let range = DateRange::single(date);
        let (overrides, bookings) = self.snapshot(room, &range)?;
        Ok(AvailabilityResolver::new(room, &overrides, &bookings).resolve(date))
    }

    /// Returns the booking surfaced for `room` on `date`, ignoring overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn matching_booking(&self, room: &Room, date: NaiveDate) -> Result<Option<Booking>> {
        let range = DateRange::single(date);
        let bookings = self.store.list_active_bookings(room.room_type(), &range)?;
        Ok(AvailabilityResolver::new(room, &[], &bookings)
            .matching_booking(date)
            .cloned())
    }

    /// Returns the effective status of `room` on every date of `range`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDate`] if the range is longer than the
    /// configured limit, or an error if the store cannot be read.
    pub fn effective_status_range(
        &self,
        room: &Room,
        range: &DateRange,
    ) -> Result<BTreeMap<NaiveDate, RoomStatus>> {
        range.ensure_max_days(self.max_range_days)?;
        let (overrides, bookings) = self.snapshot(room, range)?;
        Ok(AvailabilityResolver::new(room, &overrides, &bookings).effective_status_range(range))
    }

    /// Resolves `room` on every date of `range`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::effective_status_range`].
    pub fn resolve_range(
        &self,
        room: &Room,
        range: &DateRange,
    ) -> Result<BTreeMap<NaiveDate, Resolution>> {
        range.ensure_max_days(self.max_range_days)?;
        let (overrides, bookings) = self.snapshot(room, range)?;
        Ok(AvailabilityResolver::new(room, &overrides, &bookings).resolve_range(range))
    }

    fn snapshot(
        &self,
        room: &Room,
        range: &DateRange,
    ) -> Result<(Vec<AvailabilityOverride>, Vec<Booking>)> {
        let overrides = self.store.list_overrides(room.id(), range)?;
        let bookings = self.store.list_active_bookings(room.room_type(), range)?;
        log::debug!(
            "room {} over {range}: {} override(s), {} active booking(s)",
            room.room_number(),
            overrides.len(),
            bookings.len()
        );
        Ok((overrides, bookings))
    }
}
