//! Plan types for status mutations.
//!
//! A plan describes the writes an operation will make, without making them.

use chrono::NaiveDate;

use crate::availability::AvailabilityOverride;
use crate::booking::{BookingId, BookingStatus};
use crate::room::RoomId;

/// A single write to be made during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Move a booking from `from` to `to`.
    ///
    /// The executor re-reads the booking and refuses to write if its status
    /// is no longer `from`.
    UpdateBookingStatus {
        /// The booking to update.
        booking_id: BookingId,
        /// The status observed while planning.
        from: BookingStatus,
        /// The new status.
        to: BookingStatus,
    },

    /// Insert or replace the override for its `(room_id, date)`.
    UpsertOverride(AvailabilityOverride),

    /// Remove the override for `(room_id, date)`.
    ClearOverride {
        /// The room.
        room_id: RoomId,
        /// The date.
        date: NaiveDate,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::UpdateBookingStatus {
                booking_id,
                from,
                to,
            } => format!("Move booking {booking_id} from {from} to {to}"),
            Self::UpsertOverride(entry) => format!(
                "Set room {} to {} on {}",
                entry.room_id(),
                entry.status(),
                entry.date()
            ),
            Self::ClearOverride { room_id, date } => {
                format!("Clear override for room {room_id} on {date}")
            }
        }
    }
}

/// A complete operation plan.
///
/// Plans carry a description, the ordered actions to perform and any
/// warnings for the operator.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Check in booking 7");
    /// assert_eq!(plan.description, "Check in booking 7");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test").add_warning("booking is early");
    /// assert_eq!(plan.warnings, vec!["booking is early".to_string()]);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::RoomStatus;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_descriptions() {
        let update = PlanAction::UpdateBookingStatus {
            booking_id: BookingId::from(7),
            from: BookingStatus::Confirmed,
            to: BookingStatus::CheckedIn,
        };
        assert_eq!(
            update.description(),
            "Move booking 7 from confirmed to checked_in"
        );

        let upsert = PlanAction::UpsertOverride(AvailabilityOverride::new(
            RoomId::from(3),
            june(1),
            RoomStatus::Maintenance,
        ));
        assert_eq!(upsert.description(), "Set room 3 to maintenance on 2024-06-01");

        let clear = PlanAction::ClearOverride {
            room_id: RoomId::from(3),
            date: june(2),
        };
        assert_eq!(clear.description(), "Clear override for room 3 on 2024-06-02");
    }

    #[test]
    fn test_actions_and_warnings_keep_order() {
        let plan = OperationPlan::new("test")
            .add_action(PlanAction::ClearOverride {
                room_id: RoomId::from(1),
                date: june(1),
            })
            .add_warning("first")
            .add_action(PlanAction::ClearOverride {
                room_id: RoomId::from(1),
                date: june(2),
            })
            .add_warning("second");

        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(plan.warnings, vec!["first", "second"]);
        assert!(matches!(
            plan.actions[1],
            PlanAction::ClearOverride { date, .. } if date == june(2)
        ));
    }
}
