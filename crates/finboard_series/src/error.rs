//! Error types for the series engine.
//!
//! Filtering, aggregation and formatting never fail; only generation
//! parameters, preset selection and tab names are validated.

use finboard_core::types::DateError;
use thiserror::Error;

/// Errors raised while generating a synthetic series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// Base value is NaN or infinite.
    #[error("Invalid base value: {0} (must be finite)")]
    InvalidBaseValue(f64),

    /// Variance fraction is negative, NaN or infinite.
    #[error("Invalid variance fraction: {0} (must be finite and non-negative)")]
    InvalidVariance(f64),

    /// Trend fraction is NaN or infinite.
    #[error("Invalid trend fraction: {0} (must be finite)")]
    InvalidTrend(f64),

    /// Finite parameters whose trend or noise would overflow `f64`.
    #[error(
        "Parameters overflow: base {base_value}, variance {variance_fraction}, \
         trend {trend_fraction}"
    )]
    Overflow {
        /// Base value.
        base_value: f64,
        /// Variance fraction.
        variance_fraction: f64,
        /// Trend fraction.
        trend_fraction: f64,
    },

    /// Calendar arithmetic failed while laying out the daily walk.
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

/// Errors raised while selecting a date-range preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// Preset name not recognised.
    #[error("Unknown preset: {0}. Supported: last-month, last-quarter, custom")]
    UnknownPreset(String),

    /// Custom preset selected without both bounds.
    #[error("Custom range requires both a start and an end date")]
    MissingCustomBounds,

    /// Calendar arithmetic failed while resolving the preset.
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

/// Error for an unrecognised user tab identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown user tab: {0}. Expected user1 to user5")]
pub struct UnknownTab(pub String);

/// Asset allocation whose percentages do not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Asset allocation sums to {0}%, expected 100%")]
pub struct AllocationError(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_display() {
        let err = GeneratorError::InvalidVariance(-0.1);
        assert!(err.to_string().contains("-0.1"));
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_date_error_converts() {
        let err: PresetError = DateError::ParseError("oops".to_string()).into();
        assert!(matches!(err, PresetError::Date(_)));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_allocation_error_display() {
        let err = AllocationError(99);
        assert_eq!(err.to_string(), "Asset allocation sums to 99%, expected 100%");
    }
}
