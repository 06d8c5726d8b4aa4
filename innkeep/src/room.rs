//! Room records and room type labels.
//!
//! Rooms are created by staff and never physically removed: retiring a room
//! clears its active flag so booking history keeps pointing at it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Database identity of a room.
///
/// `RoomId::UNASSIGNED` marks a room that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Placeholder id for rooms that have not been persisted.
    pub const UNASSIGNED: Self = Self(0);

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for RoomId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category label a room is sold under, e.g. "Standard Room".
///
/// Bookings are made against a room type rather than a specific room, so two
/// labels match only when they are identical after trimming.
///
/// # Examples
///
/// ```
/// use innkeep::RoomType;
///
/// let a = RoomType::new("  Deluxe Suite ").unwrap();
/// let b = RoomType::new("Deluxe Suite").unwrap();
/// assert_eq!(a, b);
/// assert!(RoomType::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomType(String);

impl RoomType {
    /// Creates a room type label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty after trimming whitespace.
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(
                "room_type",
                "room type must be non-empty after trimming whitespace",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bookable room.
///
/// # Examples
///
/// ```
/// use innkeep::{Room, RoomType};
///
/// let room = Room::builder("R101", RoomType::new("Standard Room").unwrap())
///     .capacity(2)
///     .base_price(12_000)
///     .amenity("wifi")
///     .build()
///     .unwrap();
///
/// assert_eq!(room.room_number(), "R101");
/// assert!(room.is_active());
/// assert!(!room.is_persisted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    room_number: String,
    room_type: RoomType,
    capacity: u32,
    base_price: i64,
    amenities: BTreeSet<String>,
    is_active: bool,
}

impl Room {
    /// Creates a new room builder.
    #[must_use]
    pub fn builder(room_number: impl Into<String>, room_type: RoomType) -> RoomBuilder {
        RoomBuilder {
            id: RoomId::UNASSIGNED,
            room_number: room_number.into(),
            room_type,
            capacity: 2,
            base_price: 0,
            amenities: BTreeSet::new(),
            is_active: true,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the human-facing room number.
    #[must_use]
    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    /// Returns the maximum number of guests.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the nightly base price in cents.
    #[must_use]
    pub const fn base_price(&self) -> i64 {
        self.base_price
    }

    /// Returns the amenity labels.
    #[must_use]
    pub const fn amenities(&self) -> &BTreeSet<String> {
        &self.amenities
    }

    /// Returns whether the room is still in service.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns whether the room has been assigned a database id.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id != RoomId::UNASSIGNED
    }

    pub(crate) fn with_id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }
}

/// Builder for creating `Room` instances.
#[derive(Debug)]
pub struct RoomBuilder {
    id: RoomId,
    room_number: String,
    room_type: RoomType,
    capacity: u32,
    base_price: i64,
    amenities: BTreeSet<String>,
    is_active: bool,
}

impl RoomBuilder {
    /// Sets the database id, for records loaded from storage.
    #[must_use]
    pub const fn id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }

    /// Sets the maximum number of guests (default 2).
    #[must_use]
    pub const fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the nightly base price in cents.
    #[must_use]
    pub const fn base_price(mut self, cents: i64) -> Self {
        self.base_price = cents;
        self
    }

    /// Adds an amenity label. Blank labels are ignored.
    #[must_use]
    pub fn amenity(mut self, label: impl AsRef<str>) -> Self {
        let trimmed = label.as_ref().trim();
        if !trimmed.is_empty() {
            self.amenities.insert(trimmed.to_string());
        }
        self
    }

    /// Adds several amenity labels.
    #[must_use]
    pub fn amenities<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels.into_iter().fold(self, Self::amenity)
    }

    /// Sets the active flag (default true).
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Builds the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the room number is blank, the capacity is zero or
    /// the base price is negative.
    pub fn build(self) -> Result<Room, ValidationError> {
        let room_number = self.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(ValidationError::new(
                "room_number",
                "room number must be non-empty",
            ));
        }
        if self.capacity == 0 {
            return Err(ValidationError::new("capacity", "capacity must be positive"));
        }
        if self.base_price < 0 {
            return Err(ValidationError::new(
                "base_price",
                "base price must not be negative",
            ));
        }

        Ok(Room {
            id: self.id,
            room_number,
            room_type: self.room_type,
            capacity: self.capacity,
            base_price: self.base_price,
            amenities: self.amenities,
            is_active: self.is_active,
        })
    }
}
