//! Multi-row writes that must apply atomically.

use chrono::NaiveDate;
use rusqlite::params;

use crate::availability::AvailabilityOverride;
use crate::error::Result;
use crate::room::RoomId;

use super::connection::Database;
use super::schema::DELETE_OVERRIDE;

impl Database {
    /// Upserts several overrides in a single transaction.
    ///
    /// Either every entry is written or none is.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any upsert
    /// fails (including [`crate::Error::NotFound`] for an unknown room), or
    /// the commit fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use innkeep::database::{Database, DatabaseConfig};
    /// use innkeep::{AvailabilityOverride, DateRange, RoomId, RoomStatus};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
    /// let week = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let entries: Vec<_> = week
    ///     .days()
    ///     .map(|d| AvailabilityOverride::new(RoomId::from(1), d, RoomStatus::Maintenance))
    ///     .collect();
    /// db.batch_upsert_overrides(&entries).unwrap();
    /// ```
    pub fn batch_upsert_overrides(&mut self, entries: &[AvailabilityOverride]) -> Result<()> {
        let tx = self.begin_transaction()?;
        for entry in entries {
            Self::save_override_simple(&tx, entry)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Removes the overrides of a room on each of `dates` in a single
    /// transaction. Returns how many existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or any delete fails.
    pub fn batch_delete_overrides(&mut self, room_id: RoomId, dates: &[NaiveDate]) -> Result<usize> {
        let tx = self.begin_transaction()?;
        let mut deleted = 0;
        {
            let mut stmt = tx.prepare(DELETE_OVERRIDE)?;
            for date in dates {
                deleted += stmt.execute(params![room_id.value(), date])?;
            }
        }
        tx.commit()?;
        Ok(deleted)
    }
}
