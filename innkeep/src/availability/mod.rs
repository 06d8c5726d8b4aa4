//! Room availability: statuses, overrides, date ranges and the resolver.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use innkeep::availability::{AvailabilityOverride, AvailabilityResolver, RoomStatus};
//! use innkeep::{Room, RoomId, RoomType};
//!
//! let room = Room::builder("R101", RoomType::new("Standard Room").unwrap())
//!     .id(RoomId::from(1))
//!     .build()
//!     .unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let overrides = [AvailabilityOverride::new(room.id(), date, RoomStatus::Maintenance)];
//!
//! let resolver = AvailabilityResolver::new(&room, &overrides, &[]);
//! assert_eq!(resolver.effective_status(date), RoomStatus::Maintenance);
//! ```

mod overrides;
mod range;
mod resolver;
mod status;

#[cfg(test)]
mod proptests;

pub use overrides::AvailabilityOverride;
pub use range::{parse_date, DateRange, DATE_FORMAT};
pub use resolver::{AvailabilityResolver, Resolution, ResolutionWarning, StatusSource};
pub use status::RoomStatus;
