//! Staff sessions.
//!
//! A session is an explicit value handed to every mutation. It is not an
//! authentication mechanism: it names who is acting and bounds how long that
//! statement stays valid.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ValidationError};

/// A staff member's working session.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use innkeep::Session;
///
/// let now = Utc::now();
/// let session = Session::start("frontdesk", Duration::minutes(30), now).unwrap();
///
/// assert!(session.is_valid_at(now));
/// assert!(!session.is_valid_at(now + Duration::minutes(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `user` lasting `ttl` from `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the user name is blank or `ttl` is not positive.
    pub fn start(
        user: impl AsRef<str>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> std::result::Result<Self, ValidationError> {
        let user = user.as_ref().trim();
        if user.is_empty() {
            return Err(ValidationError::new("user", "session user must be non-empty"));
        }
        if ttl <= Duration::zero() {
            return Err(ValidationError::new("ttl", "session lifetime must be positive"));
        }

        Ok(Self {
            user: user.to_string(),
            issued_at: now,
            expires_at: now + ttl,
        })
    }

    /// Returns the acting user.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns when the session started.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the first instant the session is no longer valid.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns whether the session is valid at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.issued_at && now < self.expires_at
    }

    /// Fails unless the session is valid at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionExpired`] once `now` reaches the expiry.
    pub fn ensure_valid(&self, now: DateTime<Utc>) -> Result<()> {
        if self.is_valid_at(now) {
            Ok(())
        } else {
            Err(Error::SessionExpired {
                user: self.user.clone(),
                expired_at: self.expires_at,
            })
        }
    }
}
