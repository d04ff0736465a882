//! Inclusive date-range filtering.

use finboard_core::types::{DateRange, Series};
use tracing::trace;

/// Returns the points of `series` whose date lies in `range`, both ends inclusive.
///
/// Relative order is preserved and the input is left untouched. An
/// inverted range or one that misses the series yields an empty series.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::{DataPoint, Date, DateRange, Series};
/// use finboard_series::filter::filter_by_range;
///
/// let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
/// let series = Series::new(vec![
///     DataPoint::new(d(1, 1), 100.0),
///     DataPoint::new(d(1, 15), 200.0),
///     DataPoint::new(d(2, 1), 300.0),
/// ]);
///
/// let filtered = filter_by_range(&series, &DateRange::new(d(1, 10), d(1, 31)));
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered.points()[0].value(), 200.0);
/// ```
pub fn filter_by_range(series: &Series, range: &DateRange) -> Series {
    if range.is_inverted() {
        trace!(range = %range, "inverted range, nothing selected");
        return Series::empty();
    }

    let filtered: Series = series
        .iter()
        .filter(|point| range.contains(point.date()))
        .cloned()
        .collect();

    trace!(
        range = %range,
        input = series.len(),
        selected = filtered.len(),
        "filtered series"
    );
    filtered
}
