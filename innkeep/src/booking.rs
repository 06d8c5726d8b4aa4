//! Booking records and the booking status state machine.
//!
//! A booking is made against a room *type* for a half-open stay
//! `[check_in, check_out)`: the departure date itself is free for the next
//! guest.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::CustomerId;
use crate::error::{Error, ValidationError};
use crate::room::RoomType;

/// Database identity of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Placeholder id for bookings that have not been persisted.
    pub const UNASSIGNED: Self = Self(0);

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookingId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a booking.
///
/// ```text
/// confirmed ──► checked_in ──► checked_out
///     │              │
///     └──► cancelled ◄┘
/// ```
///
/// `checked_out` and `cancelled` are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Reserved, guest not yet arrived. Initial state.
    #[value(name = "confirmed")]
    Confirmed,
    /// Guest is in the room.
    #[value(name = "checked_in")]
    CheckedIn,
    /// Guest has left.
    #[value(name = "checked_out")]
    CheckedOut,
    /// Booking was called off.
    #[value(name = "cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Confirmed,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    /// Returns the stored name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether no further transitions are allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Returns whether a booking in this status holds its room type.
    #[must_use]
    pub const fn occupies(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Returns whether the transition table allows moving to `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::BookingStatus;
    ///
    /// assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedIn));
    /// assert!(BookingStatus::CheckedIn.can_transition_to(BookingStatus::Cancelled));
    /// assert!(!BookingStatus::CheckedOut.can_transition_to(BookingStatus::Confirmed));
    /// assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedOut));
    /// ```
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Confirmed, Self::CheckedIn | Self::Cancelled)
                | (Self::CheckedIn, Self::CheckedOut | Self::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(Error::Validation {
                field: "status".into(),
                message: format!("unknown booking status '{s}'"),
            }),
        }
    }
}

/// A booking of a room type for a stay.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::{Booking, BookingStatus, CustomerId, RoomType};
///
/// let booking = Booking::builder(
///     CustomerId::from(1),
///     RoomType::new("Standard Room").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
/// )
/// .guests(2)
/// .total_amount(24_000)
/// .advance_paid(5_000)
/// .build()
/// .unwrap();
///
/// assert_eq!(booking.status(), BookingStatus::Confirmed);
/// assert_eq!(booking.nights(), 2);
/// assert!(booking.covers(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()));
/// assert!(!booking.covers(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    customer_id: CustomerId,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    total_amount: i64,
    advance_paid: i64,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new booking builder.
    #[must_use]
    pub fn builder(
        customer_id: CustomerId,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> BookingBuilder {
        BookingBuilder {
            id: BookingId::UNASSIGNED,
            customer_id,
            room_type,
            check_in,
            check_out,
            guests: 1,
            total_amount: 0,
            advance_paid: 0,
            status: BookingStatus::Confirmed,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the booking id.
    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the booked room type.
    #[must_use]
    pub const fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    /// Returns the first night of the stay.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date. The room is free on this date.
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }

    /// Returns the total amount in cents.
    #[must_use]
    pub const fn total_amount(&self) -> i64 {
        self.total_amount
    }

    /// Returns the advance already paid in cents.
    #[must_use]
    pub const fn advance_paid(&self) -> i64 {
        self.advance_paid
    }

    /// Returns the outstanding balance in cents.
    #[must_use]
    pub const fn balance_due(&self) -> i64 {
        self.total_amount - self.advance_paid
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last status change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns whether `date` falls in `[check_in, check_out)`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.check_in && date < self.check_out
    }

    /// Returns whether this booking holds its room type on `date`.
    #[must_use]
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.status.occupies() && self.covers(date)
    }

    pub(crate) fn with_id(mut self, id: BookingId) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn with_status(mut self, status: BookingStatus, at: DateTime<Utc>) -> Self {
        self.status = status;
        self.updated_at = at;
        self
    }
}

/// Builder for creating `Booking` instances.
#[derive(Debug)]
pub struct BookingBuilder {
    id: BookingId,
    customer_id: CustomerId,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    total_amount: i64,
    advance_paid: i64,
    status: BookingStatus,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl BookingBuilder {
    /// Sets the database id, for records loaded from storage.
    #[must_use]
    pub const fn id(mut self, id: BookingId) -> Self {
        self.id = id;
        self
    }

    /// Sets the number of guests (default 1).
    #[must_use]
    pub const fn guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the total amount in cents.
    #[must_use]
    pub const fn total_amount(mut self, cents: i64) -> Self {
        self.total_amount = cents;
        self
    }

    /// Sets the advance paid in cents.
    #[must_use]
    pub const fn advance_paid(mut self, cents: i64) -> Self {
        self.advance_paid = cents;
        self
    }

    /// Sets the stored status.
    ///
    /// New bookings start as `confirmed`; this is for records loaded from
    /// storage. Live status changes go through the status mutator.
    #[must_use]
    pub const fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp (default: now).
    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Sets the last-updated timestamp (default: creation time).
    #[must_use]
    pub const fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Builds the booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the stay is empty or reversed, there are no
    /// guests, an amount is negative, or the advance exceeds the total.
    pub fn build(self) -> Result<Booking, ValidationError> {
        if self.check_in >= self.check_out {
            return Err(ValidationError::new(
                "check_out",
                format!(
                    "check-out {} must be after check-in {}",
                    self.check_out, self.check_in
                ),
            ));
        }
        if self.guests == 0 {
            return Err(ValidationError::new("guests", "at least one guest is required"));
        }
        if self.total_amount < 0 {
            return Err(ValidationError::new(
                "total_amount",
                "total amount must not be negative",
            ));
        }
        if self.advance_paid < 0 {
            return Err(ValidationError::new(
                "advance_paid",
                "advance paid must not be negative",
            ));
        }
        if self.advance_paid > self.total_amount {
            return Err(ValidationError::new(
                "advance_paid",
                "advance paid must not exceed the total amount",
            ));
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Ok(Booking {
            id: self.id,
            customer_id: self.customer_id,
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            total_amount: self.total_amount,
            advance_paid: self.advance_paid,
            status: self.status,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        })
    }
}
