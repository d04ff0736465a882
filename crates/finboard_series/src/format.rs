//! Chart axis labels.

use finboard_core::types::{DataPoint, Date, Series};

/// Formats `date` as an English abbreviated month and four-digit year.
///
/// Locale-independent and infallible for every representable date.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::Date;
/// use finboard_series::format::format_month_label;
///
/// let date = Date::from_ymd(2024, 1, 15).unwrap();
/// assert_eq!(format_month_label(date), "Jan 2024");
/// ```
pub fn format_month_label(date: Date) -> String {
    date.format("%b %Y")
}

/// Returns a copy of `series` with every point labelled by its month.
pub fn label_by_month(series: &Series) -> Series {
    series
        .iter()
        .map(|point| {
            DataPoint::new(point.date(), point.value()).with_label(format_month_label(point.date()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_format_scenario() {
        assert_eq!(format_month_label(d(2024, 1, 15)), "Jan 2024");
    }

    #[test]
    fn test_all_month_abbreviations() {
        let expected = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (index, abbreviation) in expected.iter().enumerate() {
            let label = format_month_label(d(2023, index as u32 + 1, 1));
            assert_eq!(label, format!("{} 2023", abbreviation));
        }
    }

    #[test]
    fn test_year_is_zero_padded() {
        assert_eq!(format_month_label(d(987, 7, 4)), "Jul 0987");
    }

    #[test]
    fn test_label_by_month_keeps_values() {
        let series = Series::new(vec![
            DataPoint::new(d(2024, 1, 1), 150.0),
            DataPoint::new(d(2024, 2, 1), 300.0),
        ]);
        let labelled = label_by_month(&series);
        let labels: Vec<Option<&str>> = labelled.iter().map(DataPoint::label).collect();
        assert_eq!(labels, vec![Some("Jan 2024"), Some("Feb 2024")]);
        assert_eq!(labelled.values().collect::<Vec<_>>(), vec![150.0, 300.0]);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_label_shape(year in 1000i32..10000, month in 1u32..13, day in 1u32..29) {
                let label = format_month_label(d(year, month, day));
                prop_assert_eq!(label.len(), 8);
                prop_assert!(label.ends_with(&year.to_string()));
            }
        }
    }
}
