//! Staff-entered availability overrides.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::room::RoomId;

use super::status::RoomStatus;

/// An explicit statement of a room's status on one date.
///
/// Overrides are keyed by `(room_id, date)` and take precedence over anything
/// inferred from bookings for that exact date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::{AvailabilityOverride, RoomId, RoomStatus};
///
/// let entry = AvailabilityOverride::new(
///     RoomId::from(1),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     RoomStatus::Maintenance,
/// )
/// .with_notes(Some("  repaint  ".to_string()));
///
/// assert_eq!(entry.notes(), Some("repaint"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityOverride {
    room_id: RoomId,
    date: NaiveDate,
    status: RoomStatus,
    notes: Option<String>,
    updated_by: Option<String>,
    updated_at: DateTime<Utc>,
}

impl AvailabilityOverride {
    /// Creates an override stamped with the current time.
    #[must_use]
    pub fn new(room_id: RoomId, date: NaiveDate, status: RoomStatus) -> Self {
        Self {
            room_id,
            date,
            status,
            notes: None,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }

    /// Attaches free-form notes. Blank notes are dropped.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }

    /// Records who wrote the override.
    #[must_use]
    pub fn with_updated_by(mut self, user: impl Into<String>) -> Self {
        self.updated_by = Some(user.into());
        self
    }

    /// Sets the write timestamp.
    #[must_use]
    pub const fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Returns the room this override applies to.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Returns the date this override applies to.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the stated status.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the staff member who last wrote this override.
    #[must_use]
    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    /// Returns when this override was last written.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
