//! Availability override planning.
//!
//! Overrides are upserts keyed by `(room_id, date)`; the last write wins.
//! An override that disagrees with what bookings imply is still written,
//! but the plan carries a conflict warning so the disagreement is visible.

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::{AvailabilityOverride, AvailabilityResolver, DateRange, RoomStatus};
use crate::error::{Error, Result};
use crate::room::{Room, RoomId};
use crate::store::AvailabilityStore;

use super::plan::{OperationPlan, PlanAction};

/// Options for setting overrides.
#[derive(Debug, Clone)]
pub struct OverrideOptions {
    /// The room.
    pub room_id: RoomId,

    /// The dates to cover, inclusive.
    pub dates: DateRange,

    /// The status to state.
    pub status: RoomStatus,

    /// Free-form notes.
    pub notes: Option<String>,

    /// The staff member writing the override.
    pub updated_by: Option<String>,

    /// Write timestamp. Defaults to the time the plan is built.
    pub updated_at: Option<DateTime<Utc>>,
}

impl OverrideOptions {
    /// Creates options for stating `status` for a room on one date.
    #[must_use]
    pub const fn new(room_id: RoomId, date: NaiveDate, status: RoomStatus) -> Self {
        Self {
            room_id,
            dates: DateRange::single(date),
            status,
            notes: None,
            updated_by: None,
            updated_at: None,
        }
    }

    /// Covers every date of `dates` instead of a single one.
    #[must_use]
    pub const fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_updated_by(mut self, user: impl Into<String>) -> Self {
        self.updated_by = Some(user.into());
        self
    }

    /// Sets the write timestamp.
    #[must_use]
    pub const fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }
}

fn load_room<S: AvailabilityStore + ?Sized>(store: &S, room_id: RoomId) -> Result<Room> {
    store.get_room(room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {room_id}"),
    })
}

fn describe_dates(dates: &DateRange) -> String {
    if dates.start() == dates.end() {
        format!("on {}", dates.start())
    } else {
        format!("from {} to {}", dates.start(), dates.end())
    }
}

/// An override plan generator.
pub struct OverridePlan {
    options: OverrideOptions,
}

impl OverridePlan {
    /// Creates a new override planner.
    #[must_use]
    pub const fn new(options: OverrideOptions) -> Self {
        Self { options }
    }

    /// Builds the plan: one upsert per date, plus a warning for every date
    /// where the override disagrees with the bookings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist, or an error if
    /// the store cannot be read.
    pub fn build_plan<S: AvailabilityStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let opts = &self.options;
        let room = load_room(store, opts.room_id)?;

        let mut plan = OperationPlan::new(format!(
            "Set room {} to {} {}",
            room.room_number(),
            opts.status,
            describe_dates(&opts.dates)
        ));

        let replaced = store.list_overrides(room.id(), &opts.dates)?.len();
        if replaced > 0 {
            log::debug!(
                "replacing {replaced} existing override(s) for room {}",
                room.room_number()
            );
        }

        let bookings = store.list_active_bookings(room.room_type(), &opts.dates)?;
        let resolver = AvailabilityResolver::new(&room, &[], &bookings);
        let updated_at = opts.updated_at.unwrap_or_else(Utc::now);

        for date in opts.dates.days() {
            match (resolver.matching_booking(date), opts.status) {
                (Some(booking), status) if status != RoomStatus::Occupied => {
                    plan = plan.add_warning(format!(
                        "Override '{status}' conflicts with booking {} ({} to {}) covering {date}",
                        booking.id(),
                        booking.check_in(),
                        booking.check_out()
                    ));
                }
                (None, RoomStatus::Occupied) => {
                    plan = plan.add_warning(format!(
                        "Override 'occupied' on {date} is not backed by any booking"
                    ));
                }
                _ => {}
            }

            let mut entry = AvailabilityOverride::new(room.id(), date, opts.status)
                .with_notes(opts.notes.clone())
                .with_updated_at(updated_at);
            if let Some(user) = &opts.updated_by {
                entry = entry.with_updated_by(user.clone());
            }
            plan = plan.add_action(PlanAction::UpsertOverride(entry));
        }

        Ok(plan)
    }
}

/// A plan generator for removing overrides.
///
/// Clearing is idempotent: dates without an override are skipped, and when
/// none of the dates has one the plan carries a warning instead of actions.
pub struct ClearOverridePlan {
    room_id: RoomId,
    dates: DateRange,
}

impl ClearOverridePlan {
    /// Creates a planner for clearing the override of a room on one date.
    #[must_use]
    pub const fn new(room_id: RoomId, date: NaiveDate) -> Self {
        Self {
            room_id,
            dates: DateRange::single(date),
        }
    }

    /// Creates a planner for clearing every override of a room in `dates`.
    #[must_use]
    pub const fn for_range(room_id: RoomId, dates: DateRange) -> Self {
        Self { room_id, dates }
    }

    /// Builds the plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist, or an error if
    /// the store cannot be read.
    pub fn build_plan<S: AvailabilityStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let room = load_room(store, self.room_id)?;
        let mut plan = OperationPlan::new(format!(
            "Clear overrides for room {} {}",
            room.room_number(),
            describe_dates(&self.dates)
        ));

        let mut dates: Vec<NaiveDate> = store
            .list_overrides(room.id(), &self.dates)?
            .iter()
            .map(AvailabilityOverride::date)
            .filter(|d| self.dates.contains(*d))
            .collect();
        dates.sort_unstable();
        dates.dedup();

        if dates.is_empty() {
            return Ok(plan.add_warning(format!(
                "No override for room {} {} (already clear)",
                room.room_number(),
                describe_dates(&self.dates)
            )));
        }

        for date in dates {
            plan = plan.add_action(PlanAction::ClearOverride {
                room_id: room.id(),
                date,
            });
        }
        Ok(plan)
    }
}
