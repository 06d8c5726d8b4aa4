//! Customer records.
//!
//! Customers carry no derivation logic; they exist so bookings have an owner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Database identity of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Placeholder for a customer that has not been stored yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resort customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl Customer {
    /// Creates a customer record.
    ///
    /// Optional contact fields are trimmed; blank values become `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the email has no `@`.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Customer, CustomerId};
    ///
    /// let customer = Customer::new(
    ///     CustomerId::from(1),
    ///     "Ada Guest",
    ///     Some("ada@example.com".into()),
    ///     Some("  ".into()),
    /// )
    /// .unwrap();
    /// assert_eq!(customer.phone(), None);
    /// ```
    pub fn new(
        id: CustomerId,
        name: impl AsRef<str>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "customer name must be non-empty"));
        }

        let email = non_blank(email);
        if let Some(ref email) = email {
            if !email.contains('@') {
                return Err(ValidationError::new(
                    "email",
                    format!("'{email}' is not an email address"),
                ));
            }
        }

        Ok(Self {
            id,
            name: name.to_string(),
            email,
            phone: non_blank(phone),
        })
    }

    /// Returns the customer id.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the customer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub(crate) fn with_id(mut self, id: CustomerId) -> Self {
        self.id = id;
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
