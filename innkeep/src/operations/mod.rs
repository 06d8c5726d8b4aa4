//! Booking and override mutations using the plan-execute pattern.
//!
//! Every mutation is split into two phases:
//! 1. **Planning**: reads the store, validates the request and builds a plan
//!    of actions plus any warnings
//! 2. **Execution**: applies the plan's actions to the store
//!
//! Keeping the phases apart gives dry-run mode for free and lets the
//! validation rules be tested against a mock store.
//!
//! [`StatusMutator`] wraps both phases behind session-checked calls.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{NaiveDate, Utc};
//! use innkeep::operations::{PlanExecutor, TransitionOptions, TransitionPlan};
//! use innkeep::{BookingId, BookingStatus, Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! // Generate plan
//! let options = TransitionOptions::new(BookingId::from(7), BookingStatus::CheckedIn, today);
//! let plan = TransitionPlan::new(options).build_plan(&db).unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
//! assert!(result.success);
//! ```

pub mod executor;
pub mod init;
pub mod mutator;
pub mod plan;
pub mod set_override;
pub mod transition;

#[cfg(test)]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use mutator::StatusMutator;
pub use plan::{OperationPlan, PlanAction};
pub use set_override::{ClearOverridePlan, OverrideOptions, OverridePlan};
pub use transition::{TransitionOptions, TransitionPlan};
