//! Effective room status resolution.
//!
//! The resolver combines two sources for a `(room, date)` pair:
//!
//! 1. An explicit [`AvailabilityOverride`] for that room and date, returned
//!    verbatim when present.
//! 2. Otherwise, any `confirmed` or `checked_in` booking of the room's type
//!    whose stay covers the date makes the room `occupied`.
//!
//! Anything else is `available`. Bookings are matched by room type, not by
//! room, so several bookings can cover the same date for one room. The
//! resolver then surfaces the one with the earliest check-in (lowest id on
//! ties) and reports the others as an ambiguity warning; it never blocks on
//! it.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::{Booking, BookingId};
use crate::room::Room;

use super::overrides::AvailabilityOverride;
use super::range::DateRange;
use super::status::RoomStatus;

/// Where an effective status came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSource {
    /// An explicit override for the room and date.
    Override,
    /// A booking covering the date.
    Booking,
    /// Nothing applied; the room is free.
    Default,
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Booking => write!(f, "booking"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A non-fatal observation made while resolving a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionWarning {
    /// More than one booking of the room's type covers the date.
    AmbiguousMatch {
        /// The date in question.
        date: NaiveDate,
        /// Every covering booking, in tie-break order.
        candidates: Vec<BookingId>,
        /// The booking surfaced for display.
        chosen: BookingId,
    },
    /// The surfaced booking has more guests than the room holds.
    GuestsExceedCapacity {
        /// The booking in question.
        booking: BookingId,
        /// Guests on the booking.
        guests: u32,
        /// Capacity of the room.
        capacity: u32,
    },
    /// An override hides a booking that would otherwise occupy the room.
    OverrideShadowsBooking {
        /// The hidden booking.
        booking: BookingId,
        /// The status the override states.
        status: RoomStatus,
    },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousMatch {
                date,
                candidates,
                chosen,
            } => write!(
                f,
                "{} bookings cover {date}; showing booking {chosen}",
                candidates.len()
            ),
            Self::GuestsExceedCapacity {
                booking,
                guests,
                capacity,
            } => write!(
                f,
                "booking {booking} has {guests} guests but the room holds {capacity}"
            ),
            Self::OverrideShadowsBooking { booking, status } => write!(
                f,
                "override '{status}' hides booking {booking}"
            ),
        }
    }
}

/// The full outcome of resolving one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The resolved date.
    pub date: NaiveDate,
    /// The effective status.
    pub status: RoomStatus,
    /// Which rule produced the status.
    pub source: StatusSource,
    /// The booking covering the date, if any. Present even when an override
    /// decided the status, for detail views.
    pub booking: Option<Booking>,
    /// Notes of the deciding override.
    pub notes: Option<String>,
    /// Informational warnings.
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolves effective statuses for one room over a snapshot of records.
///
/// The resolver borrows its inputs and holds no mutable state, so it can be
/// shared freely across threads. Inputs are filtered on construction:
/// overrides for other rooms, bookings of other room types and bookings that
/// no longer hold a room (`checked_out`, `cancelled`) are ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::{AvailabilityResolver, Booking, CustomerId, Room, RoomStatus, RoomType};
///
/// let standard = RoomType::new("Standard Room").unwrap();
/// let room = Room::builder("R101", standard.clone()).build().unwrap();
/// let booking = Booking::builder(
///     CustomerId::from(1),
///     standard,
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// )
/// .build()
/// .unwrap();
///
/// let bookings = [booking];
/// let resolver = AvailabilityResolver::new(&room, &[], &bookings);
///
/// let june = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
/// assert_eq!(resolver.effective_status(june(1)), RoomStatus::Occupied);
/// assert_eq!(resolver.effective_status(june(3)), RoomStatus::Available);
/// ```
#[derive(Debug)]
pub struct AvailabilityResolver<'a> {
    room: &'a Room,
    overrides: HashMap<NaiveDate, &'a AvailabilityOverride>,
    bookings: Vec<&'a Booking>,
}

impl<'a> AvailabilityResolver<'a> {
    /// Creates a resolver for `room` over the given records.
    ///
    /// Should two overrides share a date, the most recently written wins.
    #[must_use]
    pub fn new(
        room: &'a Room,
        overrides: &'a [AvailabilityOverride],
        bookings: &'a [Booking],
    ) -> Self {
        let mut by_date: HashMap<NaiveDate, &'a AvailabilityOverride> = HashMap::new();
        for entry in overrides.iter().filter(|o| o.room_id() == room.id()) {
            by_date
                .entry(entry.date())
                .and_modify(|current| {
                    if entry.updated_at() >= current.updated_at() {
                        *current = entry;
                    }
                })
                .or_insert(entry);
        }

        let mut bookings: Vec<&'a Booking> = bookings
            .iter()
            .filter(|b| b.status().occupies() && b.room_type() == room.room_type())
            .collect();
        bookings.sort_by_key(|b| (b.check_in(), b.id()));

        Self {
            room,
            overrides: by_date,
            bookings,
        }
    }

    /// Returns the room being resolved.
    #[must_use]
    pub const fn room(&self) -> &'a Room {
        self.room
    }

    /// Returns the override for `date`, if one exists.
    #[must_use]
    pub fn override_for(&self, date: NaiveDate) -> Option<&'a AvailabilityOverride> {
        self.overrides.get(&date).copied()
    }

    fn covering(&self, date: NaiveDate) -> impl Iterator<Item = &'a Booking> + '_ {
        self.bookings.iter().copied().filter(move |b| b.covers(date))
    }

    /// Returns the booking surfaced for `date`, ignoring overrides.
    #[must_use]
    pub fn matching_booking(&self, date: NaiveDate) -> Option<&'a Booking> {
        self.covering(date).next()
    }

    /// Returns the status bookings alone imply for `date`.
    #[must_use]
    pub fn inferred_status(&self, date: NaiveDate) -> RoomStatus {
        if self.matching_booking(date).is_some() {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        }
    }

    /// Returns the effective status for `date`.
    #[must_use]
    pub fn effective_status(&self, date: NaiveDate) -> RoomStatus {
        match self.override_for(date) {
            Some(entry) => entry.status(),
            None => self.inferred_status(date),
        }
    }

    /// Resolves `date` with provenance and warnings.
    #[must_use]
    pub fn resolve(&self, date: NaiveDate) -> Resolution {
        let covering: Vec<&'a Booking> = self.covering(date).collect();
        let booking = covering.first().copied();
        let mut warnings = Vec::new();

        if let [chosen, _, ..] = covering.as_slice() {
            log::debug!(
                "{} bookings of type '{}' cover {date} for room {}",
                covering.len(),
                self.room.room_type(),
                self.room.room_number()
            );
            warnings.push(ResolutionWarning::AmbiguousMatch {
                date,
                candidates: covering.iter().map(|b| b.id()).collect(),
                chosen: chosen.id(),
            });
        }

        if let Some(b) = booking {
            if b.guests() > self.room.capacity() {
                warnings.push(ResolutionWarning::GuestsExceedCapacity {
                    booking: b.id(),
                    guests: b.guests(),
                    capacity: self.room.capacity(),
                });
            }
        }

        let (status, source, notes) = match (self.override_for(date), booking) {
            (Some(entry), covered) => {
                if let Some(b) = covered {
                    if entry.status() != RoomStatus::Occupied {
                        warnings.push(ResolutionWarning::OverrideShadowsBooking {
                            booking: b.id(),
                            status: entry.status(),
                        });
                    }
                }
                (
                    entry.status(),
                    StatusSource::Override,
                    entry.notes().map(str::to_string),
                )
            }
            (None, Some(_)) => (RoomStatus::Occupied, StatusSource::Booking, None),
            (None, None) => (RoomStatus::Available, StatusSource::Default, None),
        };

        Resolution {
            date,
            status,
            source,
            booking: booking.cloned(),
            notes,
            warnings,
        }
    }

    /// Returns the effective status of every date in `range`.
    #[must_use]
    pub fn effective_status_range(&self, range: &DateRange) -> BTreeMap<NaiveDate, RoomStatus> {
        range
            .days()
            .map(|date| (date, self.effective_status(date)))
            .collect()
    }

    /// Resolves every date in `range`.
    #[must_use]
    pub fn resolve_range(&self, range: &DateRange) -> BTreeMap<NaiveDate, Resolution> {
        range.days().map(|date| (date, self.resolve(date))).collect()
    }
}
