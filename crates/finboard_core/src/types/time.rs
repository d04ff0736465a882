//! Calendar date type for daily financial series.
//!
//! This module provides:
//! - `Date`: Type-safe calendar day wrapper around chrono::NaiveDate
//! - Calendar arithmetic used by the generator and date-range presets
//!
//! Dates carry no time-zone semantics: a `Date` is a local calendar day.
//!
//! # Examples
//!
//! ```
//! use finboard_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 11).unwrap();
//! assert_eq!(end - start, 10);
//! ```

use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the calendar arithmetic needed to
/// walk, bucket and window daily series.
///
/// # Examples
///
/// ```
/// use finboard_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use finboard_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns the first day of a month given as an offset from January of `year`.
    ///
    /// `month_offset` is zero-based and may fall outside `0..12`; it rolls
    /// into neighbouring years, so `month_start(2024, -1)` is 1 December 2023
    /// and `month_start(2024, 12)` is 1 January 2025.
    ///
    /// # Examples
    ///
    /// ```
    /// use finboard_core::types::time::Date;
    ///
    /// let dec = Date::month_start(2024, -1).unwrap();
    /// assert_eq!(dec, Date::from_ymd(2023, 12, 1).unwrap());
    /// ```
    pub fn month_start(year: i32, month_offset: i32) -> Result<Self, DateError> {
        let total = i64::from(year) * 12 + i64::from(month_offset);
        let target_year = i32::try_from(total.div_euclid(12))
            .map_err(|_| DateError::OutOfRange(format!("year offset from {}", year)))?;
        let target_month = total.rem_euclid(12) as u32 + 1;
        Self::from_ymd(target_year, target_month, 1)
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use finboard_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the zero-based month index (0-11).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days later.
    ///
    /// # Errors
    /// `DateError::OutOfRange` when the result leaves chrono's supported range.
    pub fn add_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("{} + {} days", self, days)))
    }

    /// Returns the previous calendar day.
    ///
    /// # Errors
    /// `DateError::OutOfRange` on the earliest representable date.
    pub fn pred(self) -> Result<Self, DateError> {
        self.0
            .pred_opt()
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("day before {}", self)))
    }

    /// Subtracts whole calendar years, keeping month and day.
    ///
    /// A 29 February that lands in a non-leap year overflows into 1 March,
    /// so the result is 365 or 366 days earlier depending on leap placement.
    ///
    /// # Examples
    ///
    /// ```
    /// use finboard_core::types::time::Date;
    ///
    /// let today = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(today.sub_years(1).unwrap(), Date::from_ymd(2023, 3, 1).unwrap());
    /// ```
    pub fn sub_years(self, years: i32) -> Result<Self, DateError> {
        let target = self
            .year()
            .checked_sub(years)
            .ok_or_else(|| DateError::OutOfRange(format!("{} - {} years", self, years)))?;

        match self.0.with_year(target) {
            Some(date) => Ok(Date(date)),
            None if self.month() == 2 && self.day() == 29 => Self::from_ymd(target, 3, 1),
            None => Err(DateError::OutOfRange(format!("{} - {} years", self, years))),
        }
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Date(self.0 - Days::new(u64::from(self.day() - 1)))
    }

    /// Formats the date with a chrono format string.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
