//! Database CRUD operations for rooms, customers, bookings and overrides.
//!
//! Reads are associated functions over a `&Connection`, so they work on the
//! database and inside an open transaction alike. Writes take `&mut self`
//! and run in their own `IMMEDIATE` transaction.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::availability::{AvailabilityOverride, DateRange, RoomStatus};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::customer::{Customer, CustomerId};
use crate::error::{Error, Result};
use crate::room::{Room, RoomId, RoomType};

use super::connection::Database;
use super::schema::{DELETE_OVERRIDE, UPSERT_OVERRIDE};

const ROOM_COLUMNS: &str =
    "id, room_number, room_type, capacity, base_price, amenities, is_active";

const BOOKING_COLUMNS: &str = "id, customer_id, room_type, check_in, check_out, guests, \
     total_amount, advance_paid, status, created_at, updated_at";

const OVERRIDE_COLUMNS: &str = "room_id, date, status, notes, updated_by, updated_at";

const INSERT_ROOM: &str = r"
    INSERT INTO rooms (room_number, room_type, capacity, base_price, amenities, is_active)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const INSERT_CUSTOMER: &str = "INSERT INTO customers (name, email, phone) VALUES (?1, ?2, ?3)";

const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (customer_id, room_type, check_in, check_out, guests, total_amount, advance_paid,
     status, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
";

const UPDATE_BOOKING_STATUS: &str =
    "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3";

const SELECT_ACTIVE_ROOM_OF_TYPE: &str =
    "SELECT 1 FROM rooms WHERE room_type = ? AND is_active = 1 LIMIT 1";

fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Converts a timestamp to Unix epoch seconds for storage.
pub(super) fn to_unix_secs(at: DateTime<Utc>) -> i64 {
    at.timestamp()
}

/// Converts stored Unix epoch seconds back to a timestamp.
pub(super) fn from_unix_secs(column: usize, secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, secs))
}

/// Expects the columns of [`ROOM_COLUMNS`], in order.
fn row_to_room(row: &Row<'_>) -> rusqlite::Result<Room> {
    let id: i64 = row.get(0)?;
    let room_number: String = row.get(1)?;
    let room_type: String = row.get(2)?;
    let capacity: u32 = row.get(3)?;
    let base_price: i64 = row.get(4)?;
    let amenities: String = row.get(5)?;
    let is_active: bool = row.get(6)?;

    let room_type = RoomType::new(room_type).map_err(|e| conversion_error(2, e))?;
    let amenities: Vec<String> =
        serde_json::from_str(&amenities).map_err(|e| conversion_error(5, e))?;

    Room::builder(room_number, room_type)
        .id(RoomId::from(id))
        .capacity(capacity)
        .base_price(base_price)
        .amenities(amenities)
        .active(is_active)
        .build()
        .map_err(|e| conversion_error(0, e))
}

/// Expects the columns of [`BOOKING_COLUMNS`], in order.
fn row_to_booking(row: &Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let customer_id: i64 = row.get(1)?;
    let room_type: String = row.get(2)?;
    let check_in: NaiveDate = row.get(3)?;
    let check_out: NaiveDate = row.get(4)?;
    let guests: u32 = row.get(5)?;
    let total_amount: i64 = row.get(6)?;
    let advance_paid: i64 = row.get(7)?;
    let status: String = row.get(8)?;
    let created_at = from_unix_secs(9, row.get(9)?)?;
    let updated_at = from_unix_secs(10, row.get(10)?)?;

    let room_type = RoomType::new(room_type).map_err(|e| conversion_error(2, e))?;
    let status: BookingStatus = status.parse().map_err(|e| conversion_error(8, e))?;

    Booking::builder(CustomerId::from(customer_id), room_type, check_in, check_out)
        .id(BookingId::from(id))
        .guests(guests)
        .total_amount(total_amount)
        .advance_paid(advance_paid)
        .status(status)
        .created_at(created_at)
        .updated_at(updated_at)
        .build()
        .map_err(|e| conversion_error(0, e))
}

/// Expects the columns of [`OVERRIDE_COLUMNS`], in order.
fn row_to_override(row: &Row<'_>) -> rusqlite::Result<AvailabilityOverride> {
    let room_id: i64 = row.get(0)?;
    let date: NaiveDate = row.get(1)?;
    let status: String = row.get(2)?;
    let notes: Option<String> = row.get(3)?;
    let updated_by: Option<String> = row.get(4)?;
    let updated_at = from_unix_secs(5, row.get(5)?)?;

    let status: RoomStatus = status.parse().map_err(|e| conversion_error(2, e))?;

    let entry = AvailabilityOverride::new(RoomId::from(room_id), date, status)
        .with_notes(notes)
        .with_updated_at(updated_at);
    Ok(match updated_by {
        Some(user) => entry.with_updated_by(user),
        None => entry,
    })
}

fn row_to_customer(row: &Row<'_>) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let email: Option<String> = row.get(2)?;
    let phone: Option<String> = row.get(3)?;
    Customer::new(CustomerId::from(id), name, email, phone).map_err(|e| conversion_error(0, e))
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

impl Database {
    // ---- rooms ----

    /// Registers a room and returns it with its assigned id.
    ///
    /// Any id already on `room` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if the room number is taken, or an error
    /// if the write fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use innkeep::database::{Database, DatabaseConfig};
    /// use innkeep::{Room, RoomType};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
    /// let room = Room::builder("R101", RoomType::new("Standard Room").unwrap())
    ///     .capacity(2)
    ///     .base_price(12_000)
    ///     .build()
    ///     .unwrap();
    ///
    /// let room = db.create_room(&room).unwrap();
    /// assert!(room.is_persisted());
    /// ```
    pub fn create_room(&mut self, room: &Room) -> Result<Room> {
        let amenities = serde_json::to_string(room.amenities())?;
        let tx = self.begin_transaction()?;

        if Self::get_room_by_number(&tx, room.room_number())?.is_some() {
            return Err(Error::Conflict {
                details: format!("room number '{}' already exists", room.room_number()),
            });
        }

        tx.execute(
            INSERT_ROOM,
            params![
                room.room_number(),
                room.room_type().as_str(),
                room.capacity(),
                room.base_price(),
                amenities,
                room.is_active(),
            ],
        )?;
        let id = RoomId::from(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("created room {} with id {id}", room.room_number());
        Ok(room.clone().with_id(id))
    }

    /// Looks up a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room_by_id(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        let sql = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?");
        Ok(conn
            .query_row(&sql, [id.value()], row_to_room)
            .optional()?)
    }

    /// Looks up a room by its room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room_by_number(conn: &Connection, room_number: &str) -> Result<Option<Room>> {
        let sql = format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE room_number = ?");
        Ok(conn
            .query_row(&sql, [room_number.trim()], row_to_room)
            .optional()?)
    }

    /// Lists rooms ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection, include_inactive: bool) -> Result<Vec<Room>> {
        let sql = format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE is_active = 1 OR ?1 ORDER BY room_number"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rooms = stmt
            .query_map([include_inactive], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rooms)
    }

    /// Marks a room inactive. Rooms are never deleted.
    ///
    /// Returns `false` if the room does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn deactivate_room(&mut self, id: RoomId) -> Result<bool> {
        let tx = self.begin_transaction()?;
        let rows = tx.execute("UPDATE rooms SET is_active = 0 WHERE id = ?", [id.value()])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    // ---- customers ----

    /// Registers a customer and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn create_customer(&mut self, customer: &Customer) -> Result<Customer> {
        let tx = self.begin_transaction()?;
        tx.execute(
            INSERT_CUSTOMER,
            params![customer.name(), customer.email(), customer.phone()],
        )?;
        let id = CustomerId::from(tx.last_insert_rowid());
        tx.commit()?;
        Ok(customer.clone().with_id(id))
    }

    /// Looks up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_customer_by_id(conn: &Connection, id: CustomerId) -> Result<Option<Customer>> {
        Ok(conn
            .query_row(
                "SELECT id, name, email, phone FROM customers WHERE id = ?",
                [id.value()],
                row_to_customer,
            )
            .optional()?)
    }

    // ---- bookings ----

    /// Records a booking and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer does not exist ([`Error::NotFound`])
    /// - No active room has the booking's room type ([`Error::Validation`])
    /// - The write fails
    pub fn create_booking(&mut self, booking: &Booking) -> Result<Booking> {
        let tx = self.begin_transaction()?;

        if Self::get_customer_by_id(&tx, booking.customer_id())?.is_none() {
            return Err(Error::NotFound {
                resource: format!("customer {}", booking.customer_id()),
            });
        }

        let has_room = tx
            .query_row(
                SELECT_ACTIVE_ROOM_OF_TYPE,
                [booking.room_type().as_str()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !has_room {
            return Err(Error::Validation {
                field: "room_type".into(),
                message: format!("no active room of type '{}'", booking.room_type()),
            });
        }

        tx.execute(
            INSERT_BOOKING,
            params![
                booking.customer_id().value(),
                booking.room_type().as_str(),
                booking.check_in(),
                booking.check_out(),
                booking.guests(),
                booking.total_amount(),
                booking.advance_paid(),
                booking.status().as_str(),
                to_unix_secs(booking.created_at()),
                to_unix_secs(booking.updated_at()),
            ],
        )?;
        let id = BookingId::from(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!(
            "created booking {id} for {} {}..{}",
            booking.room_type(),
            booking.check_in(),
            booking.check_out()
        );
        Ok(booking.clone().with_id(id))
    }

    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_by_id(conn: &Connection, id: BookingId) -> Result<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?");
        Ok(conn
            .query_row(&sql, [id.value()], row_to_booking)
            .optional()?)
    }

    /// Lists bookings ordered by check-in, optionally only those in `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(conn: &Connection, status: Option<BookingStatus>) -> Result<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings
             WHERE ?1 IS NULL OR status = ?1
             ORDER BY check_in, id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let bookings = stmt
            .query_map([status.map(BookingStatus::as_str)], row_to_booking)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(bookings)
    }

    /// Lists `confirmed` and `checked_in` bookings of `room_type` whose
    /// half-open stay touches `range`, ordered by check-in then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_active_bookings(
        conn: &Connection,
        room_type: &RoomType,
        range: &DateRange,
    ) -> Result<Vec<Booking>> {
        let sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings
             WHERE room_type = ?1
               AND status IN ('confirmed', 'checked_in')
               AND check_in <= ?3
               AND check_out > ?2
             ORDER BY check_in, id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let bookings = stmt
            .query_map(
                params![room_type.as_str(), range.start(), range.end()],
                row_to_booking,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(bookings)
    }

    /// Sets a booking's status and `updated_at`. Performs no transition checks.
    ///
    /// Returns `false` if the booking does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
        at: DateTime<Utc>,
    ) -> Result<bool> {
        let tx = self.begin_transaction()?;
        let rows = tx.execute(
            UPDATE_BOOKING_STATUS,
            params![status.as_str(), to_unix_secs(at), id.value()],
        )?;
        tx.commit()?;
        Ok(rows > 0)
    }

    // ---- overrides ----

    /// Lists the overrides of a room within `range`, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn query_overrides(
        conn: &Connection,
        room_id: RoomId,
        range: &DateRange,
    ) -> Result<Vec<AvailabilityOverride>> {
        let sql = format!(
            "SELECT {OVERRIDE_COLUMNS} FROM room_availability
             WHERE room_id = ?1 AND date BETWEEN ?2 AND ?3
             ORDER BY date"
        );
        let mut stmt = conn.prepare(&sql)?;
        let overrides = stmt
            .query_map(
                params![room_id.value(), range.start(), range.end()],
                row_to_override,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(overrides)
    }

    /// Looks up the override for `(room_id, date)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_override(
        conn: &Connection,
        room_id: RoomId,
        date: NaiveDate,
    ) -> Result<Option<AvailabilityOverride>> {
        let sql = format!(
            "SELECT {OVERRIDE_COLUMNS} FROM room_availability WHERE room_id = ?1 AND date = ?2"
        );
        Ok(conn
            .query_row(&sql, params![room_id.value(), date], row_to_override)
            .optional()?)
    }

    /// Inserts or replaces the override for its `(room_id, date)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist, or an error if
    /// the write fails.
    pub fn save_override(&mut self, entry: &AvailabilityOverride) -> Result<()> {
        let tx = self.begin_transaction()?;
        Self::save_override_simple(&tx, entry)?;
        tx.commit()?;
        Ok(())
    }

    /// Upserts an override without opening a transaction.
    ///
    /// Intended for use inside an existing transaction.
    ///
    /// # Errors
    ///
    /// Same as [`Self::save_override`].
    pub fn save_override_simple(conn: &Connection, entry: &AvailabilityOverride) -> Result<()> {
        conn.execute(
            UPSERT_OVERRIDE,
            params![
                entry.room_id().value(),
                entry.date(),
                entry.status().as_str(),
                entry.notes(),
                entry.updated_by(),
                to_unix_secs(entry.updated_at()),
            ],
        )
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                Error::NotFound {
                    resource: format!("room {}", entry.room_id()),
                }
            } else {
                Error::Database(e)
            }
        })?;
        Ok(())
    }

    /// Removes the override for `(room_id, date)`.
    ///
    /// Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn delete_override(&mut self, room_id: RoomId, date: NaiveDate) -> Result<bool> {
        let tx = self.begin_transaction()?;
        let rows = tx.execute(DELETE_OVERRIDE, params![room_id.value(), date])?;
        tx.commit()?;
        Ok(rows > 0)
    }
}
