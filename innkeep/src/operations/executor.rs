//! Plan execution engine.
//!
//! The executor takes operation plans and applies them to a store.

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::AvailabilityOverride;
use crate::error::{Error, Result};
use crate::room::RoomId;
use crate::store::AvailabilityStore;

use super::plan::{OperationPlan, PlanAction};

enum Pending {
    None,
    Upserts(Vec<AvailabilityOverride>),
    Clears(RoomId, Vec<NaiveDate>),
}

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
        }
    }
}

/// Executes operation plans against a store.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting without changes).
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use innkeep::operations::{OverrideOptions, OverridePlan, PlanExecutor};
/// use innkeep::{Database, DatabaseConfig, RoomId, RoomStatus};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let options = OverrideOptions::new(RoomId::from(1), date, RoomStatus::Maintenance);
/// let plan = OverridePlan::new(options).build_plan(&db).unwrap();
///
/// let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a, S: AvailabilityStore + ?Sized> {
    store: &'a mut S,
    dry_run: bool,
    at: Option<DateTime<Utc>>,
}

impl<'a, S: AvailabilityStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            dry_run: false,
            at: None,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is reported but nothing is written.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Stamps writes with `at` instead of the current time.
    #[must_use]
    pub const fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = Some(at);
        self
    }

    /// Executes the given plan.
    ///
    /// Actions run in order and execution stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute, including
    /// [`Error::Conflict`] when a booking changed status after planning.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::from_plan(plan, true));
        }

        let at = self.at.unwrap_or_else(Utc::now);
        let mut pending = Pending::None;
        for action in &plan.actions {
            log::debug!("{}", action.description());
            match action {
                PlanAction::UpsertOverride(entry) => {
                    if let Pending::Upserts(batch) = &mut pending {
                        batch.push(entry.clone());
                    } else {
                        self.flush(&mut pending)?;
                        pending = Pending::Upserts(vec![entry.clone()]);
                    }
                }
                PlanAction::ClearOverride { room_id, date } => match &mut pending {
                    Pending::Clears(room, dates) if room == room_id => dates.push(*date),
                    _ => {
                        self.flush(&mut pending)?;
                        pending = Pending::Clears(*room_id, vec![*date]);
                    }
                },
                PlanAction::UpdateBookingStatus { .. } => {
                    self.flush(&mut pending)?;
                    self.execute_action(action, at)?;
                }
            }
        }
        self.flush(&mut pending)?;

        Ok(ExecutionResult::from_plan(plan, false))
    }

    // Consecutive override writes for the same kind (and, for clears, the
    // same room) go to the store as one batch.
    fn flush(&mut self, pending: &mut Pending) -> Result<()> {
        match std::mem::replace(pending, Pending::None) {
            Pending::None => Ok(()),
            Pending::Upserts(mut batch) if batch.len() == 1 => {
                self.store.upsert_override(&batch.remove(0))
            }
            Pending::Upserts(batch) => self.store.upsert_overrides(&batch),
            Pending::Clears(room_id, dates) if dates.len() == 1 => {
                self.store.clear_override(room_id, dates[0]).map(|_| ())
            }
            Pending::Clears(room_id, dates) => {
                self.store.clear_overrides(room_id, &dates).map(|_| ())
            }
        }
    }

    fn execute_action(&mut self, action: &PlanAction, at: DateTime<Utc>) -> Result<()> {
        match action {
            PlanAction::UpdateBookingStatus {
                booking_id,
                from,
                to,
            } => {
                let current = self
                    .store
                    .get_booking(*booking_id)?
                    .ok_or_else(|| Error::NotFound {
                        resource: format!("booking {booking_id}"),
                    })?;
                if current.status() != *from {
                    return Err(Error::Conflict {
                        details: format!(
                            "booking {booking_id} is now {}, expected {from}",
                            current.status()
                        ),
                    });
                }
                if !self.store.update_booking_status(*booking_id, *to, at)? {
                    return Err(Error::NotFound {
                        resource: format!("booking {booking_id}"),
                    });
                }
                Ok(())
            }
            PlanAction::UpsertOverride(entry) => self.store.upsert_override(entry),
            PlanAction::ClearOverride { room_id, date } => {
                self.store.clear_override(*room_id, *date).map(|_| ())
            }
        }
    }
}
