//! Common test utilities for integration tests.
//!
//! Fixtures build a small resort: rooms of one type, a customer and
//! bookings against them, all stored in a temporary database.

pub mod database;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use innkeep::{Booking, BookingStatus, CustomerId, Room, RoomType, Session};

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// A date in June 2024.
#[allow(dead_code)]
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

/// A fixed instant early on 2024-06-01, whole seconds.
#[allow(dead_code)]
pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_717_200_000, 0).unwrap()
}

/// A session for the front desk valid for eight hours from [`epoch`].
#[allow(dead_code)]
pub fn front_desk() -> Session {
    Session::start("front-desk", Duration::hours(8), epoch()).unwrap()
}

/// The "Standard Room" type.
#[allow(dead_code)]
pub fn standard() -> RoomType {
    RoomType::new("Standard Room").unwrap()
}

/// Builder for test rooms with sensible defaults.
///
/// Defaults: type "Standard Room", capacity 2, price 120.00, wifi.
#[allow(dead_code)]
pub struct RoomFixture {
    number: String,
    room_type: RoomType,
    capacity: u32,
}

#[allow(dead_code)]
impl RoomFixture {
    /// Creates a fixture for room `number`.
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string(),
            room_type: standard(),
            capacity: 2,
        }
    }

    /// Sets the room type.
    pub fn with_type(mut self, label: &str) -> Self {
        self.room_type = RoomType::new(label).unwrap();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds the unsaved room.
    pub fn build(self) -> Room {
        Room::builder(self.number, self.room_type)
            .capacity(self.capacity)
            .base_price(12_000)
            .amenity("wifi")
            .build()
            .expect("fixture should build a valid room")
    }
}

/// Builder for test bookings with sensible defaults.
///
/// Defaults: two guests, 240.00 total, 50.00 paid, confirmed, created at
/// [`epoch`].
#[allow(dead_code)]
pub struct BookingFixture {
    customer_id: CustomerId,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    status: BookingStatus,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a fixture for a standard-room stay.
    pub fn new(customer_id: CustomerId, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            customer_id,
            room_type: standard(),
            check_in,
            check_out,
            guests: 2,
            status: BookingStatus::Confirmed,
        }
    }

    /// Sets the room type.
    pub fn with_type(mut self, label: &str) -> Self {
        self.room_type = RoomType::new(label).unwrap();
        self
    }

    /// Sets the guest count.
    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the initial status.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the unsaved booking.
    pub fn build(self) -> Booking {
        Booking::builder(self.customer_id, self.room_type, self.check_in, self.check_out)
            .guests(self.guests)
            .total_amount(24_000)
            .advance_paid(5_000)
            .status(self.status)
            .created_at(epoch())
            .build()
            .expect("fixture should build a valid booking")
    }
}
