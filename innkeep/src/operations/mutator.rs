//! Session-checked booking and override mutations.

use chrono::{DateTime, NaiveDate, Utc};

use crate::availability::{DateRange, RoomStatus};
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::{Error, Result};
use crate::room::RoomId;
use crate::session::Session;
use crate::store::AvailabilityStore;

use crate::service::DEFAULT_MAX_RANGE_DAYS;

use super::executor::{ExecutionResult, PlanExecutor};
use super::set_override::{ClearOverridePlan, OverrideOptions, OverridePlan};
use super::transition::{TransitionOptions, TransitionPlan};

/// Applies validated status changes to a store.
///
/// Every mutation first checks that the caller's [`Session`] is still valid,
/// then plans the change against the current state of the store and
/// executes it. Warnings from planning are logged and returned in the
/// [`ExecutionResult`].
///
/// # Examples
///
/// ```no_run
/// use chrono::{Duration, NaiveDate, Utc};
/// use innkeep::{BookingId, BookingStatus, Database, DatabaseConfig, Session, StatusMutator};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
/// let session = Session::start("maria", Duration::minutes(30), Utc::now()).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let booking = StatusMutator::new(&mut db)
///     .transition_booking(&session, BookingId::from(7), BookingStatus::CheckedIn, today)
///     .unwrap();
/// assert_eq!(booking.status(), BookingStatus::CheckedIn);
/// ```
pub struct StatusMutator<'a, S: AvailabilityStore + ?Sized> {
    store: &'a mut S,
    enforce_check_in_window: bool,
    max_range_days: u32,
    dry_run: bool,
    now: Option<DateTime<Utc>>,
}

impl<'a, S: AvailabilityStore + ?Sized> StatusMutator<'a, S> {
    /// Creates a mutator over `store`.
    #[must_use]
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            enforce_check_in_window: false,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
            dry_run: false,
            now: None,
        }
    }

    /// Rejects check-ins outside the booked stay instead of warning.
    #[must_use]
    pub const fn with_enforce_check_in_window(mut self, enforce: bool) -> Self {
        self.enforce_check_in_window = enforce;
        self
    }

    /// Caps the number of dates a range override may cover.
    #[must_use]
    pub const fn with_max_range_days(mut self, days: u32) -> Self {
        self.max_range_days = days;
        self
    }

    /// Plans and validates without writing.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Uses a fixed clock for session checks and write timestamps.
    #[must_use]
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    fn executor(&mut self, now: DateTime<Utc>) -> PlanExecutor<'_, S> {
        let executor = PlanExecutor::new(&mut *self.store).at(now);
        if self.dry_run {
            executor.dry_run()
        } else {
            executor
        }
    }

    /// Moves a booking to `to` and returns the updated booking.
    ///
    /// The booking is re-read from the store, so the transition is checked
    /// against its current status.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionExpired`] if the session is no longer valid
    /// - [`Error::NotFound`] if the booking does not exist
    /// - [`Error::InvalidTransition`] for moves outside the transition table
    /// - [`Error::CheckInOutsideStay`] when the check-in window is enforced
    pub fn transition_booking(
        &mut self,
        session: &Session,
        booking_id: BookingId,
        to: BookingStatus,
        today: NaiveDate,
    ) -> Result<Booking> {
        self.apply_transition(session, booking_id, to, today)
            .map(|(booking, _)| booking)
    }

    /// Same as [`Self::transition_booking`], also returning the execution
    /// report with any warnings.
    ///
    /// In dry-run mode the returned booking shows the status it would have.
    ///
    /// # Errors
    ///
    /// Same as [`Self::transition_booking`].
    pub fn apply_transition(
        &mut self,
        session: &Session,
        booking_id: BookingId,
        to: BookingStatus,
        today: NaiveDate,
    ) -> Result<(Booking, ExecutionResult)> {
        let now = self.now();
        session.ensure_valid(now)?;

        let options = TransitionOptions::new(booking_id, to, today)
            .with_enforce_check_in_window(self.enforce_check_in_window);
        let plan = TransitionPlan::new(options).build_plan(&*self.store)?;
        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        let result = self.executor(now).execute(&plan)?;
        log::debug!("{} moved booking {booking_id} to {to}", session.user());

        let booking = if self.dry_run {
            self.store
                .get_booking(booking_id)?
                .map(|b| b.with_status(to, now))
        } else {
            self.store.get_booking(booking_id)?
        };
        let booking = booking.ok_or_else(|| Error::NotFound {
            resource: format!("booking {booking_id}"),
        })?;
        Ok((booking, result))
    }

    /// Writes an override stating `status` for a room on `date`.
    ///
    /// The override is stamped with the session user. Disagreement with a
    /// covering booking is reported as a warning, not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionExpired`] if the session is no longer valid
    /// - [`Error::NotFound`] if the room does not exist
    pub fn set_override(
        &mut self,
        session: &Session,
        room_id: RoomId,
        date: NaiveDate,
        status: RoomStatus,
        notes: Option<String>,
    ) -> Result<ExecutionResult> {
        self.set_override_range(session, room_id, DateRange::single(date), status, notes)
    }

    /// Writes the same override for every date of `dates`.
    ///
    /// A range is applied as one batch, so a failure leaves none of its
    /// dates changed when the store is transactional.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionExpired`] if the session is no longer valid
    /// - [`Error::InvalidDate`] if the range is longer than the configured limit
    /// - [`Error::NotFound`] if the room does not exist
    pub fn set_override_range(
        &mut self,
        session: &Session,
        room_id: RoomId,
        dates: DateRange,
        status: RoomStatus,
        notes: Option<String>,
    ) -> Result<ExecutionResult> {
        let now = self.now();
        session.ensure_valid(now)?;
        dates.ensure_max_days(self.max_range_days)?;

        let options = OverrideOptions::new(room_id, dates.start(), status)
            .with_dates(dates)
            .with_notes(notes)
            .with_updated_by(session.user())
            .with_updated_at(now);
        let plan = OverridePlan::new(options).build_plan(&*self.store)?;
        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        self.executor(now).execute(&plan)
    }

    /// Removes the override for a room on `date`, reverting it to inference.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionExpired`] if the session is no longer valid
    /// - [`Error::NotFound`] if the room does not exist
    pub fn clear_override(
        &mut self,
        session: &Session,
        room_id: RoomId,
        date: NaiveDate,
    ) -> Result<ExecutionResult> {
        self.clear_override_range(session, room_id, DateRange::single(date))
    }

    /// Removes every override for a room within `dates`.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionExpired`] if the session is no longer valid
    /// - [`Error::InvalidDate`] if the range is longer than the configured limit
    /// - [`Error::NotFound`] if the room does not exist
    pub fn clear_override_range(
        &mut self,
        session: &Session,
        room_id: RoomId,
        dates: DateRange,
    ) -> Result<ExecutionResult> {
        let now = self.now();
        session.ensure_valid(now)?;
        dates.ensure_max_days(self.max_range_days)?;

        let plan = ClearOverridePlan::for_range(room_id, dates).build_plan(&*self.store)?;
        for warning in &plan.warnings {
            log::info!("{warning}");
        }
        self.executor(now).execute(&plan)
    }
}
