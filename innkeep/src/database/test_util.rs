//! Shared fixtures for database unit tests.

use chrono::{DateTime, NaiveDate};
use tempfile::tempdir;

use crate::booking::Booking;
use crate::customer::{Customer, CustomerId};
use crate::database::{Database, DatabaseConfig};
use crate::room::{Room, RoomType};

/// Creates a database in a temporary directory that outlives the test.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the whole test
    std::mem::forget(dir);

    db
}

/// A date in June 2024.
///
/// # Panics
///
/// Panics if `day` is not a valid day of June.
#[must_use]
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

/// The room type used by the fixtures.
///
/// # Panics
///
/// Never, the label is non-empty.
#[must_use]
pub fn standard_type() -> RoomType {
    RoomType::new("Standard Room").unwrap()
}

/// An unsaved two-guest standard room.
///
/// # Panics
///
/// Panics if `number` is blank.
#[must_use]
pub fn standard_room(number: &str) -> Room {
    Room::builder(number, standard_type())
        .capacity(2)
        .base_price(12_000)
        .amenity("wifi")
        .build()
        .unwrap()
}

/// Saves a customer.
///
/// # Panics
///
/// Panics if the write fails.
pub fn create_test_customer(db: &mut Database) -> Customer {
    let customer = Customer::new(
        CustomerId::UNASSIGNED,
        "Ada Guest",
        Some("ada@example.com".into()),
        None,
    )
    .unwrap();
    db.create_customer(&customer).unwrap()
}

/// Saves a confirmed two-guest standard booking with whole-second
/// timestamps, so it compares equal after a round trip.
///
/// # Panics
///
/// Panics if the booking is invalid or the write fails.
pub fn create_test_booking(
    db: &mut Database,
    customer_id: CustomerId,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Booking {
    let booking = Booking::builder(customer_id, standard_type(), check_in, check_out)
        .guests(2)
        .total_amount(24_000)
        .advance_paid(5_000)
        .created_at(DateTime::from_timestamp(1_717_000_000, 0).unwrap())
        .build()
        .unwrap();
    db.create_booking(&booking).unwrap()
}
