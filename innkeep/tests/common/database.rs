//! Shared database test utilities.

use innkeep::database::{Database, DatabaseConfig};
use innkeep::{Booking, Customer, CustomerId, Room};

use super::{BookingFixture, RoomFixture};

/// Creates a temporary test database.
///
/// The temporary directory is leaked so it outlives the database.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// A resort with stored rooms and one customer.
#[allow(dead_code)]
pub struct Resort {
    /// The database.
    pub db: Database,
    /// The stored customer.
    pub customer: Customer,
}

#[allow(dead_code)]
impl Resort {
    /// Creates a database with one customer and no rooms.
    pub fn new() -> Self {
        let mut db = create_test_database();
        let customer = Customer::new(
            CustomerId::from(0),
            "Ada Guest",
            Some("ada@example.com".into()),
            None,
        )
        .unwrap();
        let customer = db.create_customer(&customer).unwrap();
        Self { db, customer }
    }

    /// Stores a standard room.
    pub fn add_room(&mut self, number: &str) -> Room {
        self.db.create_room(&RoomFixture::new(number).build()).unwrap()
    }

    /// Stores a room built from a fixture.
    pub fn add_room_from(&mut self, fixture: RoomFixture) -> Room {
        self.db.create_room(&fixture.build()).unwrap()
    }

    /// Stores a confirmed standard booking for the customer.
    pub fn book(&mut self, check_in: chrono::NaiveDate, check_out: chrono::NaiveDate) -> Booking {
        let booking = BookingFixture::new(self.customer.id(), check_in, check_out).build();
        self.db.create_booking(&booking).unwrap()
    }

    /// Stores a booking built from a fixture.
    pub fn book_from(&mut self, fixture: BookingFixture) -> Booking {
        self.db.create_booking(&fixture.build()).unwrap()
    }
}
