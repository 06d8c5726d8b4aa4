//! `SQLite` storage for rooms, customers, bookings and availability overrides.
//!
//! [`Database`] implements [`crate::AvailabilityStore`], so the availability
//! service and the status mutator run directly against it.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use innkeep::database::{Database, DatabaseConfig};
//! use innkeep::{AvailabilityService, Room, RoomType};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
//! let room = Room::builder("R101", RoomType::new("Standard Room").unwrap())
//!     .build()
//!     .unwrap();
//! let room = db.create_room(&room).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let status = AvailabilityService::new(&db).effective_status(&room, date).unwrap();
//! println!("{} on {date}: {status}", room.room_number());
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod store;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
