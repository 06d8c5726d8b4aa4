//! Integration tests for the database layer.
//!
//! These tests exercise the full database stack including auto-initialization,
//! schema versioning, persistence across connections and batch atomicity.

mod common;

use std::thread;
use std::time::Duration;

use common::database::Resort;
use common::{epoch, june, BookingFixture, RoomFixture};
use tempfile::tempdir;

use innkeep::database::{Database, DatabaseConfig};
use innkeep::{
    AvailabilityOverride, AvailabilityService, AvailabilityStore, BookingStatus, DateRange,
    Error, RoomId, RoomStatus,
};

#[test]
fn test_database_auto_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("subdir").join("innkeep.db");
    assert!(!db_path.parent().unwrap().exists());

    let _db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    assert!(db_path.exists());
}

#[test]
fn test_schema_version_compatibility() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("version_test.db");

    Database::open(DatabaseConfig::new(&db_path)).unwrap();
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();
    }

    let err = Database::open(DatabaseConfig::new(&db_path)).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 999
        }
    ));
}

#[test]
fn test_records_persist_across_connections() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("innkeep.db");

    let (room, booking) = {
        let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        let customer = db
            .create_customer(
                &innkeep::Customer::new(innkeep::CustomerId::from(0), "Ada Guest", None, None)
                    .unwrap(),
            )
            .unwrap();
        let room = db.create_room(&RoomFixture::new("R101").build()).unwrap();
        let booking = db
            .create_booking(&BookingFixture::new(customer.id(), june(1), june(3)).build())
            .unwrap();
        db.upsert_override(
            &AvailabilityOverride::new(room.id(), june(2), RoomStatus::Blocked)
                .with_updated_by("manager")
                .with_updated_at(epoch()),
        )
        .unwrap();
        (room, booking)
    };

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(
        Database::get_room_by_number(db.connection(), "R101").unwrap(),
        Some(room.clone())
    );
    assert_eq!(
        Database::get_booking_by_id(db.connection(), booking.id()).unwrap(),
        Some(booking)
    );

    let statuses = AvailabilityService::new(&db)
        .effective_status_range(&room, &DateRange::new(june(1), june(3)).unwrap())
        .unwrap();
    assert_eq!(
        statuses.values().copied().collect::<Vec<_>>(),
        vec![
            RoomStatus::Occupied,
            RoomStatus::Blocked,
            RoomStatus::Available
        ]
    );
}

#[test]
fn test_active_booking_window_query() {
    let mut resort = Resort::new();
    resort.add_room("R101");
    resort.add_room_from(RoomFixture::new("D201").with_type("Deluxe Suite"));
    let customer = resort.customer.id();

    let early = resort.book(june(1), june(3));
    let late = resort.book(june(10), june(12));
    let cancelled = resort.book_from(
        BookingFixture::new(customer, june(2), june(4)).with_status(BookingStatus::Cancelled),
    );
    resort.book_from(BookingFixture::new(customer, june(2), june(4)).with_type("Deluxe Suite"));

    let window = DateRange::new(june(2), june(10)).unwrap();
    let found = resort
        .db
        .list_active_bookings(&common::standard(), &window)
        .unwrap();
    let ids: Vec<_> = found.iter().map(innkeep::Booking::id).collect();
    assert_eq!(ids, vec![early.id(), late.id()]);
    assert!(!ids.contains(&cancelled.id()));

    // check_out is exclusive: a stay ending on the window start is outside it
    let window = DateRange::new(june(3), june(9)).unwrap();
    assert!(resort
        .db
        .list_active_bookings(&common::standard(), &window)
        .unwrap()
        .is_empty());
}

#[test]
fn test_booking_requires_customer_and_room_type() {
    let mut resort = Resort::new();
    resort.add_room("R101");

    let err = resort
        .db
        .create_booking(&BookingFixture::new(innkeep::CustomerId::from(99), june(1), june(2)).build())
        .unwrap_err();
    assert!(err.is_not_found());

    let err = resort
        .db
        .create_booking(
            &BookingFixture::new(resort.customer.id(), june(1), june(2))
                .with_type("Penthouse")
                .build(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "room_type"));
}

#[test]
fn test_deactivated_room_is_kept_but_hidden() {
    let mut resort = Resort::new();
    let room = resort.add_room("R101");
    resort.add_room("R102");

    assert!(resort.db.deactivate_room(room.id()).unwrap());

    let active = Database::list_rooms(resort.db.connection(), false).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].room_number(), "R102");

    let all = Database::list_rooms(resort.db.connection(), true).unwrap();
    assert_eq!(all.len(), 2);
    assert!(!Database::get_room_by_id(resort.db.connection(), room.id())
        .unwrap()
        .unwrap()
        .is_active());
}

#[test]
fn test_duplicate_room_number_conflicts() {
    let mut resort = Resort::new();
    resort.add_room("R101");

    let err = resort
        .db
        .create_room(&RoomFixture::new("R101").with_capacity(4).build())
        .unwrap_err();
    assert!(matches!(err, Error::Conflict { .. }));
}

#[test]
fn test_batch_upsert_is_atomic() {
    let mut resort = Resort::new();
    let room = resort.add_room("R101");

    let batch = vec![
        AvailabilityOverride::new(room.id(), june(1), RoomStatus::Blocked),
        AvailabilityOverride::new(RoomId::from(404), june(1), RoomStatus::Blocked),
    ];
    let err = resort.db.upsert_overrides(&batch).unwrap_err();
    assert!(err.is_not_found());

    let overrides = resort
        .db
        .list_overrides(room.id(), &DateRange::single(june(1)))
        .unwrap();
    assert!(overrides.is_empty());
}

#[test]
fn test_concurrent_readers_see_committed_override() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("innkeep.db");
    let room = {
        let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        db.create_room(&RoomFixture::new("R101").build()).unwrap()
    };

    let writer_path = db_path.clone();
    let writer_room = room.id();
    let writer = thread::spawn(move || {
        let mut db = Database::open(
            DatabaseConfig::new(&writer_path).with_busy_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        for day in 1..=10 {
            db.upsert_override(&AvailabilityOverride::new(
                writer_room,
                june(day),
                RoomStatus::Maintenance,
            ))
            .unwrap();
        }
    });

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let path = db_path.clone();
            let room = room.clone();
            thread::spawn(move || {
                let db = Database::open(DatabaseConfig::new(&path)).unwrap();
                let service = AvailabilityService::new(&db);
                for day in 1..=10 {
                    let status = service.effective_status(&room, june(day)).unwrap();
                    assert!(matches!(
                        status,
                        RoomStatus::Available | RoomStatus::Maintenance
                    ));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    let db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    let statuses = AvailabilityService::new(&db)
        .effective_status_range(&room, &DateRange::new(june(1), june(10)).unwrap())
        .unwrap();
    assert!(statuses.values().all(|s| *s == RoomStatus::Maintenance));
}
