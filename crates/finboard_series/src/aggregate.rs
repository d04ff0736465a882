//! Monthly aggregation of daily series.
//!
//! Points are bucketed by calendar `(year, month)`; each bucket keeps a
//! running sum and count, so the fold is commutative and the bucket mean
//! does not depend on input order beyond floating-point summation order.

use std::collections::BTreeMap;

use finboard_core::types::{DataPoint, Date, Series};
use tracing::trace;

/// Calendar month identifying an aggregation bucket.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    /// Calendar year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
}

impl MonthKey {
    /// Bucket key for the month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Running sum and count for one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyBucket {
    /// First day of the bucket's month.
    pub date: Date,
    /// Sum of accumulated values.
    pub sum: f64,
    /// Number of accumulated values.
    pub count: usize,
}

impl MonthlyBucket {
    /// Creates a bucket from its first point.
    fn from_point(point: &DataPoint) -> Self {
        Self {
            date: point.date().first_of_month(),
            sum: point.value(),
            count: 1,
        }
    }

    /// Accumulates a value into this bucket.
    fn accumulate(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Arithmetic mean of the bucket.
    ///
    /// Buckets are only created from a point, so `count >= 1`.
    pub fn average(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Folds `series` into per-month buckets, keyed chronologically.
pub fn monthly_buckets(series: &Series) -> BTreeMap<MonthKey, MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();
    for point in series {
        buckets
            .entry(MonthKey::of(point.date()))
            .and_modify(|bucket| bucket.accumulate(point.value()))
            .or_insert_with(|| MonthlyBucket::from_point(point));
    }
    buckets
}

/// Reduces a series to one averaged point per calendar month present.
///
/// Each output point is dated the first day of its month and valued at the
/// mean of that month's input values. Output is sorted ascending by date
/// whatever the input order; months without input are omitted. Empty input
/// gives an empty series.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::{DataPoint, Date, Series};
/// use finboard_series::aggregate::aggregate_monthly;
///
/// let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
/// let series = Series::new(vec![
///     DataPoint::new(d(1, 1), 100.0),
///     DataPoint::new(d(1, 15), 200.0),
///     DataPoint::new(d(2, 1), 300.0),
/// ]);
///
/// let monthly = aggregate_monthly(&series);
/// assert_eq!(monthly.len(), 2);
/// assert_eq!(monthly.points()[0].date(), d(1, 1));
/// assert_eq!(monthly.points()[0].value(), 150.0);
/// assert_eq!(monthly.points()[1].value(), 300.0);
/// ```
pub fn aggregate_monthly(series: &Series) -> Series {
    let buckets = monthly_buckets(series);
    trace!(input = series.len(), months = buckets.len(), "aggregated to monthly");

    buckets
        .into_values()
        .map(|bucket| DataPoint::new(bucket.date, bucket.average()))
        .collect()
}
