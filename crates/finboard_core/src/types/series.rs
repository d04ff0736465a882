//! Ordered sequence of data points.

use super::data_point::DataPoint;
use super::time::Date;

/// An ordered sequence of [`DataPoint`] values representing one metric over time.
///
/// Generated series are ordered by non-decreasing date, but a `Series` does
/// not enforce ordering: consumers must not assume sorted input unless they
/// produced it themselves. Operations on a series return a new series and
/// never mutate their input.
///
/// # Examples
///
/// ```
/// use finboard_core::types::{DataPoint, Date, Series};
///
/// let series: Series = [(1, 100.0), (15, 200.0)]
///     .into_iter()
///     .map(|(day, v)| DataPoint::new(Date::from_ymd(2024, 1, day).unwrap(), v))
///     .collect();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.values().sum::<f64>(), 300.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Series(Vec<DataPoint>);

impl Series {
    /// Wraps an existing vector of points, keeping its order.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self(points)
    }

    /// Creates an empty series.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the series has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the points as a slice.
    pub fn points(&self) -> &[DataPoint] {
        &self.0
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.0.iter()
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(DataPoint::value)
    }

    /// Iterates over the dates in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().map(DataPoint::date)
    }

    /// First point in sequence order.
    pub fn first(&self) -> Option<&DataPoint> {
        self.0.first()
    }

    /// Last point in sequence order.
    pub fn last(&self) -> Option<&DataPoint> {
        self.0.last()
    }

    /// Sum of all values; `0.0` for an empty series.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Consumes the series, returning the underlying points.
    pub fn into_inner(self) -> Vec<DataPoint> {
        self.0
    }
}

impl From<Vec<DataPoint>> for Series {
    fn from(points: Vec<DataPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Series {
    type Item = DataPoint;
    type IntoIter = std::vec::IntoIter<DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(m: u32, d: u32, v: f64) -> DataPoint {
        DataPoint::new(Date::from_ymd(2024, m, d).unwrap(), v)
    }

    #[test]
    fn test_empty_series() {
        let series = Series::empty();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
        assert_eq!(series.total(), 0.0);
    }

    #[test]
    fn test_series_keeps_insertion_order() {
        let series = Series::new(vec![point(2, 1, 3.0), point(1, 1, 1.0)]);
        let dates: Vec<Date> = series.dates().collect();
        assert_eq!(dates[0], Date::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(dates[1], Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(series.last().map(DataPoint::value), Some(1.0));
    }

    #[test]
    fn test_total_with_negative_values() {
        let series: Series = vec![point(1, 1, 10.5), point(1, 2, -2.25)].into();
        assert_relative_eq!(series.total(), 8.25);
    }

    #[test]
    fn test_into_iterator_by_ref_and_value() {
        let series: Series = vec![point(1, 1, 1.0), point(1, 2, 2.0)].into();
        let by_ref: f64 = (&series).into_iter().map(DataPoint::value).sum();
        let by_value: Vec<DataPoint> = series.clone().into_iter().collect();
        assert_eq!(by_ref, 3.0);
        assert_eq!(by_value, series.into_inner());
    }
}
