//! Calendar date parsing and inclusive date ranges.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format accepted on input and used for display (`2024-06-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the input is not a valid `YYYY-MM-DD` date.
///
/// # Examples
///
/// ```
/// use innkeep::availability::parse_date;
///
/// assert!(parse_date("2024-06-01").is_ok());
/// assert!(parse_date("2024-02-30").is_err());
/// assert!(parse_date("June 1st").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| Error::invalid_date(input, e.to_string()))
}

/// An inclusive range of calendar dates, `[start, end]`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert_eq!(range.len_days(), 3);
/// assert_eq!(range.days().count(), 3);
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

// Deserialized form; converted through `DateRange::new` so order is checked.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = Error;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range covering `start` through `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::invalid_date(
                format!("{start}..{end}"),
                "range end is before range start",
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single date.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parses a range from two date strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if either date is malformed or the
    /// range is out of order.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Returns the first date in the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last date in the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of dates in the range.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns whether `date` lies in the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns whether a half-open stay `[check_in, check_out)` touches any
    /// date of this range.
    #[must_use]
    pub fn overlaps_stay(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in <= self.end && check_out > self.start
    }

    /// Iterates over every date in the range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Fails if the range spans more than `max_days` dates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] when the range is too long.
    pub fn ensure_max_days(&self, max_days: u32) -> Result<()> {
        if self.len_days() > i64::from(max_days) {
            return Err(Error::invalid_date(
                self.to_string(),
                format!(
                    "range spans {} days, the limit is {max_days}",
                    self.len_days()
                ),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_trims() {
        assert_eq!(parse_date(" 2024-06-01 ").unwrap(), date(2024, 6, 1));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("06/01/2024").unwrap_err();
        assert!(matches!(err, Error::InvalidDate { ref value, .. } if value == "06/01/2024"));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single(date(2024, 6, 1));
        assert_eq!(range.len_days(), 1);
        assert_eq!(range.days().collect::<Vec<_>>(), vec![date(2024, 6, 1)]);
    }

    #[test]
    fn test_range_crosses_month_boundary() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        assert_eq!(
            range.days().collect::<Vec<_>>(),
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_out_of_order_range() {
        let err = DateRange::parse("2024-06-03", "2024-06-01").unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
    }

    #[test]
    fn test_overlaps_stay_is_half_open() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 5)).unwrap();
        // Stay leaving on the 3rd does not touch the range.
        assert!(!range.overlaps_stay(date(2024, 6, 1), date(2024, 6, 3)));
        assert!(range.overlaps_stay(date(2024, 6, 1), date(2024, 6, 4)));
        assert!(range.overlaps_stay(date(2024, 6, 5), date(2024, 6, 9)));
        assert!(!range.overlaps_stay(date(2024, 6, 6), date(2024, 6, 9)));
    }

    #[test]
    fn test_ensure_max_days() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert!(range.ensure_max_days(31).is_ok());
        assert!(range.ensure_max_days(30).is_err());
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2024, 6, 1), date(2024, 6, 3)).unwrap();
        assert_eq!(range.to_string(), "2024-06-01..2024-06-03");
    }

    #[test]
    fn test_deserialize_checks_order() {
        let range: DateRange =
            serde_json::from_str(r#"{"start":"2024-06-01","end":"2024-06-03"}"#).unwrap();
        assert_eq!(range.len_days(), 3);

        let err = serde_json::from_str::<DateRange>(r#"{"start":"2024-06-03","end":"2024-06-01"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("range end is before range start"));
    }
}
