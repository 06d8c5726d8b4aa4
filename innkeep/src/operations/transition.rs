//! Booking status transition planning.
//!
//! Allowed moves:
//!
//! | From         | To            |
//! |--------------|---------------|
//! | `confirmed`  | `checked_in`  |
//! | `confirmed`  | `cancelled`   |
//! | `checked_in` | `checked_out` |
//! | `checked_in` | `cancelled`   |
//!
//! `checked_out` and `cancelled` are terminal. Checking in outside the stay
//! window is a warning unless the window is enforced, and cancelling a
//! booking that is already checked in is allowed but flagged.

use chrono::NaiveDate;

use crate::booking::{BookingId, BookingStatus};
use crate::error::{Error, Result};
use crate::store::AvailabilityStore;

use super::plan::{OperationPlan, PlanAction};

/// Options for a booking transition.
#[derive(Debug, Clone)]
pub struct TransitionOptions {
    /// The booking to move.
    pub booking_id: BookingId,

    /// The requested status.
    pub to: BookingStatus,

    /// The business date the transition happens on.
    pub today: NaiveDate,

    /// Reject check-ins outside `[check_in, check_out)` instead of warning.
    pub enforce_check_in_window: bool,
}

impl TransitionOptions {
    /// Creates options with the check-in window not enforced.
    #[must_use]
    pub const fn new(booking_id: BookingId, to: BookingStatus, today: NaiveDate) -> Self {
        Self {
            booking_id,
            to,
            today,
            enforce_check_in_window: false,
        }
    }

    /// Sets whether check-ins outside the stay are rejected.
    #[must_use]
    pub const fn with_enforce_check_in_window(mut self, enforce: bool) -> Self {
        self.enforce_check_in_window = enforce;
        self
    }
}

/// A booking transition plan generator.
pub struct TransitionPlan {
    options: TransitionOptions,
}

impl TransitionPlan {
    /// Creates a new transition planner.
    #[must_use]
    pub const fn new(options: TransitionOptions) -> Self {
        Self { options }
    }

    /// Validates the transition against the stored booking and builds a plan.
    ///
    /// Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The booking does not exist
    /// - The move is not in the transition table, or is a same-state move
    /// - A check-in falls outside the stay and the window is enforced
    pub fn build_plan<S: AvailabilityStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let TransitionOptions {
            booking_id,
            to,
            today,
            enforce_check_in_window,
        } = self.options;

        let booking = store.get_booking(booking_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("booking {booking_id}"),
        })?;
        let from = booking.status();

        if !from.can_transition_to(to) {
            return Err(Error::InvalidTransition { from, to });
        }

        let mut plan = OperationPlan::new(format!("Move booking {booking_id} to {to}"));

        match (from, to) {
            (BookingStatus::Confirmed, BookingStatus::CheckedIn) if !booking.covers(today) => {
                if enforce_check_in_window {
                    return Err(Error::CheckInOutsideStay {
                        booking: booking_id,
                        today,
                        check_in: booking.check_in(),
                        check_out: booking.check_out(),
                    });
                }
                plan = plan.add_warning(format!(
                    "Checking in booking {booking_id} on {today}, outside its stay {} to {}",
                    booking.check_in(),
                    booking.check_out()
                ));
            }
            (BookingStatus::CheckedIn, BookingStatus::Cancelled) => {
                plan = plan.add_warning(format!(
                    "Booking {booking_id} is cancelled after check-in; its remaining nights are released"
                ));
            }
            _ => {}
        }

        Ok(plan.add_action(PlanAction::UpdateBookingStatus {
            booking_id,
            from,
            to,
        }))
    }
}
