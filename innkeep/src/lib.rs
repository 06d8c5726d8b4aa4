#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for resolving resort room availability and managing booking
//! status.
//!
//! A room's effective status on a date comes from two sources: an explicit
//! availability override set by staff, which always wins, and otherwise the
//! `confirmed` or `checked_in` bookings of the room's type whose stay covers
//! the date. Bookings move through a fixed lifecycle enforced by the
//! [`StatusMutator`].
//!
//! ## Core Types
//!
//! - [`Room`], [`Booking`] and [`Customer`]: the stored records
//! - [`AvailabilityResolver`]: pure status resolution over a snapshot
//! - [`AvailabilityService`]: resolution against an [`AvailabilityStore`]
//! - [`StatusMutator`]: validated booking transitions and overrides
//! - [`Database`]: the `SQLite` store
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use innkeep::{AvailabilityResolver, Booking, CustomerId, Room, RoomId, RoomStatus, RoomType};
//!
//! let standard = RoomType::new("Standard Room").unwrap();
//! let room = Room::builder("R101", standard.clone())
//!     .id(RoomId::from(1))
//!     .build()
//!     .unwrap();
//!
//! let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! let booking = Booking::builder(CustomerId::from(1), standard, june(1), june(3))
//!     .build()
//!     .unwrap();
//!
//! let bookings = [booking];
//! let resolver = AvailabilityResolver::new(&room, &[], &bookings);
//! assert_eq!(resolver.effective_status(june(2)), RoomStatus::Occupied);
//! assert_eq!(resolver.effective_status(june(3)), RoomStatus::Available);
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod customer;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod room;
pub mod service;
pub mod session;
pub mod store;

// Re-export key types at crate root for convenience
pub use availability::{
    AvailabilityOverride, AvailabilityResolver, DateRange, Resolution, ResolutionWarning,
    RoomStatus, StatusSource,
};
pub use booking::{Booking, BookingId, BookingStatus};
pub use config::{Config, ConfigBuilder};
pub use customer::{Customer, CustomerId};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result, ValidationError};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{ExecutionResult, OperationPlan, PlanAction, PlanExecutor, StatusMutator};
pub use room::{Room, RoomId, RoomType};
pub use service::AvailabilityService;
pub use session::Session;
pub use store::AvailabilityStore;
