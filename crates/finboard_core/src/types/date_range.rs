//! Inclusive calendar-date interval.

use std::fmt;

use super::time::Date;

/// Inclusive `[start_date, end_date]` interval used to filter a series.
///
/// `start_date <= end_date` is assumed but not enforced. An inverted range
/// contains no dates, so filtering with it yields an empty series rather
/// than an error.
///
/// # Examples
///
/// ```
/// use finboard_core::types::{Date, DateRange};
///
/// let range = DateRange::new(
///     Date::from_ymd(2024, 1, 10).unwrap(),
///     Date::from_ymd(2024, 1, 31).unwrap(),
/// );
/// assert!(range.contains(Date::from_ymd(2024, 1, 10).unwrap()));
/// assert!(range.contains(Date::from_ymd(2024, 1, 31).unwrap()));
/// assert!(!range.contains(Date::from_ymd(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First included day.
    pub start_date: Date,
    /// Last included day.
    pub end_date: Date,
}

impl DateRange {
    /// Creates a range without validating bound order.
    pub fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns `true` when `start_date <= date <= end_date`.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns `true` when the start lies after the end.
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Number of days covered, `0` for an inverted range.
    pub fn num_days(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            self.end_date - self.start_date + 1
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start_date, self.end_date)
    }
}
