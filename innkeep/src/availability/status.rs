//! Room status values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The status of a room on a given date.
///
/// Overrides may set any of the four values; booking inference only ever
/// yields `Available` or `Occupied`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Free to sell.
    Available,
    /// Held by a guest.
    Occupied,
    /// Out of service for upkeep.
    Maintenance,
    /// Withheld from sale for any other reason.
    Blocked,
}

impl RoomStatus {
    /// Every status.
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Blocked,
    ];

    /// Returns the stored name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Blocked => "blocked",
        }
    }

    /// Returns whether a room in this status can take a new guest.
    #[must_use]
    pub const fn is_sellable(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "blocked" => Ok(Self::Blocked),
            _ => Err(Error::Validation {
                field: "status".into(),
                message: format!("unknown room status '{s}'"),
            }),
        }
    }
}
