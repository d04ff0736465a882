//! Single observation of a metric on a calendar day.

use super::time::Date;

/// One dated value in a [`Series`](super::Series).
///
/// Fields are private: a point is immutable once created. The optional
/// label carries a display string such as a chart axis label.
///
/// Values are expected to be finite. The generator only ever produces
/// non-negative values, but filtering and aggregation accept negatives
/// from other producers.
///
/// # Examples
///
/// ```
/// use finboard_core::types::{DataPoint, Date};
///
/// let date = Date::from_ymd(2024, 1, 1).unwrap();
/// let point = DataPoint::new(date, 100.0).with_label("Jan 2024");
/// assert_eq!(point.value(), 100.0);
/// assert_eq!(point.label(), Some("Jan 2024"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    date: Date,
    value: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    label: Option<String>,
}

impl DataPoint {
    /// Creates an unlabelled point.
    #[inline]
    pub fn new(date: Date, value: f64) -> Self {
        Self {
            date,
            value,
            label: None,
        }
    }

    /// Returns the point with `label` attached.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Calendar day of the observation.
    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Observed value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
