//! [`AvailabilityStore`] backed by the `SQLite` database.

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::{AvailabilityOverride, DateRange};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::Result;
use crate::room::{Room, RoomId, RoomType};
use crate::store::AvailabilityStore;

use super::connection::Database;

impl AvailabilityStore for Database {
    fn get_room(&self, id: RoomId) -> Result<Option<Room>> {
        Self::get_room_by_id(&self.conn, id)
    }

    fn get_booking(&self, id: BookingId) -> Result<Option<Booking>> {
        Self::get_booking_by_id(&self.conn, id)
    }

    fn list_overrides(
        &self,
        room_id: RoomId,
        range: &DateRange,
    ) -> Result<Vec<AvailabilityOverride>> {
        Self::query_overrides(&self.conn, room_id, range)
    }

    fn list_active_bookings(&self, room_type: &RoomType, range: &DateRange) -> Result<Vec<Booking>> {
        Self::query_active_bookings(&self.conn, room_type, range)
    }

    fn upsert_override(&mut self, entry: &AvailabilityOverride) -> Result<()> {
        self.save_override(entry)
    }

    fn upsert_overrides(&mut self, entries: &[AvailabilityOverride]) -> Result<()> {
        self.batch_upsert_overrides(entries)
    }

    fn clear_override(&mut self, room_id: RoomId, date: NaiveDate) -> Result<bool> {
        self.delete_override(room_id, date)
    }

    fn clear_overrides(&mut self, room_id: RoomId, dates: &[NaiveDate]) -> Result<usize> {
        self.batch_delete_overrides(room_id, dates)
    }

    fn update_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
        at: DateTime<Utc>,
    ) -> Result<bool> {
        self.set_booking_status(id, status, at)
    }
}
