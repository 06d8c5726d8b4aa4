//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for availability resolution,
//! status transitions and persistence, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::booking::{BookingId, BookingStatus};

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
#[derive(Debug, Error)]
pub enum Error {
    /// A date or date range was malformed or out of order.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The offending input, as given.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A booking status transition is not permitted.
    #[error("invalid booking transition from {from} to {to}")]
    InvalidTransition {
        /// Current status of the booking.
        from: BookingStatus,
        /// Requested status.
        to: BookingStatus,
    },

    /// Check-in was attempted outside the booked stay while the window is enforced.
    #[error("booking {booking} cannot check in on {today}: stay runs {check_in} to {check_out}")]
    CheckInOutsideStay {
        /// The booking being checked in.
        booking: BookingId,
        /// The date the check-in was attempted.
        today: NaiveDate,
        /// First night of the stay.
        check_in: NaiveDate,
        /// Departure date (exclusive).
        check_out: NaiveDate,
    },

    /// The staff session used for a mutation has expired.
    #[error("session for '{user}' expired at {expired_at}")]
    SessionExpired {
        /// The session user.
        user: String,
        /// When the session stopped being valid.
        expired_at: DateTime<Utc>,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A uniqueness constraint was violated.
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

/// A field-level validation failure raised while building domain records.
///
/// Converted into [`Error::Validation`] at the library boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error means a record does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Error;
    ///
    /// let err = Error::NotFound { resource: "room 101".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is a rejected status change.
    ///
    /// Both illegal transitions and out-of-window check-ins count.
    #[must_use]
    pub fn is_rejected_transition(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::CheckInOutsideStay { .. }
        )
    }

    pub(crate) fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
