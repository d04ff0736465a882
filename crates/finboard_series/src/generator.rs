//! Synthetic daily series generator.
//!
//! Produces one year of daily values along a linear trend with independent
//! uniform noise per day:
//!
//! ```text
//! trend(i) = base * (1 + trend_fraction * i / 365)
//! noise(i) = (u_i - 0.5) * variance_fraction * base,   u_i ~ U[0, 1)
//! value(i) = max(0, trend(i) + noise(i))
//! ```
//!
//! Noise is not cumulative: each day deviates from the trend line on its
//! own. The walk starts on today's month and day one calendar year ago,
//! with "today" and the random source both supplied by the caller.

use finboard_core::clock::{Clock, SystemClock};
use finboard_core::types::{DataPoint, Date, DateError, Series};
use rand::Rng;
use tracing::debug;

use crate::error::GeneratorError;

/// Number of daily points in a generated series.
pub const SERIES_LENGTH: usize = 365;

/// Default proportional noise amplitude.
pub const DEFAULT_VARIANCE_FRACTION: f64 = 0.1;

/// Default proportional change applied across the series.
pub const DEFAULT_TREND_FRACTION: f64 = 0.02;

/// Parameters of one synthetic series.
///
/// # Examples
///
/// ```rust
/// use finboard_series::generator::GeneratorParams;
///
/// let params = GeneratorParams::new(75_000.0).with_variance(0.15).with_trend(0.05);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.trend_value(0), 75_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorParams {
    /// Level of the series on its first day.
    pub base_value: f64,
    /// Noise amplitude as a fraction of `base_value`.
    pub variance_fraction: f64,
    /// Total linear change over the series as a fraction of `base_value`.
    pub trend_fraction: f64,
}

impl GeneratorParams {
    /// Creates parameters with the default variance and trend.
    pub fn new(base_value: f64) -> Self {
        Self {
            base_value,
            variance_fraction: DEFAULT_VARIANCE_FRACTION,
            trend_fraction: DEFAULT_TREND_FRACTION,
        }
    }

    /// Set the variance fraction.
    pub fn with_variance(mut self, variance_fraction: f64) -> Self {
        self.variance_fraction = variance_fraction;
        self
    }

    /// Set the trend fraction.
    pub fn with_trend(mut self, trend_fraction: f64) -> Self {
        self.trend_fraction = trend_fraction;
        self
    }

    /// Checks the parameters.
    ///
    /// Any finite base value is accepted, including zero and negatives.
    /// The variance fraction must be finite and non-negative; the trend
    /// fraction must be finite. The trend end point, the noise amplitude and
    /// their sum must also stay finite so every generated value is finite.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !self.base_value.is_finite() {
            return Err(GeneratorError::InvalidBaseValue(self.base_value));
        }
        if !self.variance_fraction.is_finite() || self.variance_fraction < 0.0 {
            return Err(GeneratorError::InvalidVariance(self.variance_fraction));
        }
        if !self.trend_fraction.is_finite() {
            return Err(GeneratorError::InvalidTrend(self.trend_fraction));
        }

        let trend_end = self.base_value * (1.0 + self.trend_fraction);
        let amplitude = self.variance_fraction * self.base_value;
        let peak = self.base_value.abs().max(trend_end.abs()) + 0.5 * amplitude.abs();
        if !trend_end.is_finite() || !amplitude.is_finite() || !peak.is_finite() {
            return Err(GeneratorError::Overflow {
                base_value: self.base_value,
                variance_fraction: self.variance_fraction,
                trend_fraction: self.trend_fraction,
            });
        }
        Ok(())
    }

    /// Trend line value at day `index`.
    #[inline]
    pub fn trend_value(&self, index: usize) -> f64 {
        self.base_value * (1.0 + self.trend_fraction * (index as f64 / SERIES_LENGTH as f64))
    }

    /// Noise term for a uniform draw `uniform` in [0, 1).
    #[inline]
    pub fn noise(&self, uniform: f64) -> f64 {
        (uniform - 0.5) * self.variance_fraction * self.base_value
    }

    /// Clamped value at day `index` for the given uniform draw.
    #[inline]
    pub fn value_at(&self, index: usize, uniform: f64) -> f64 {
        (self.trend_value(index) + self.noise(uniform)).max(0.0)
    }
}

/// Generator of synthetic daily series anchored on an injected clock.
///
/// # Examples
///
/// ```rust
/// use finboard_core::clock::FixedClock;
/// use finboard_core::types::Date;
/// use finboard_series::generator::{GeneratorParams, TimeSeriesGenerator, SERIES_LENGTH};
/// use finboard_series::rng::SeriesRng;
///
/// let clock = FixedClock::new(Date::from_ymd(2024, 10, 19).unwrap());
/// let generator = TimeSeriesGenerator::new(clock);
/// let mut rng = SeriesRng::from_seed(42);
///
/// let series = generator.generate(&GeneratorParams::new(1_000.0), &mut rng).unwrap();
/// assert_eq!(series.len(), SERIES_LENGTH);
/// assert_eq!(series.first().unwrap().date(), Date::from_ymd(2023, 10, 19).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct TimeSeriesGenerator<C = SystemClock> {
    clock: C,
}

impl<C: Clock> TimeSeriesGenerator<C> {
    /// Create a generator reading "today" from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// First day of the walk: today with the year reduced by one.
    pub fn start_date(&self) -> Result<Date, DateError> {
        self.clock.today().sub_years(1)
    }

    /// Generate one series of [`SERIES_LENGTH`] consecutive daily points.
    ///
    /// Draws exactly one uniform value per point from `rng`.
    ///
    /// # Errors
    ///
    /// `GeneratorError` when the parameters fail [`GeneratorParams::validate`]
    /// or the walk leaves the supported calendar range.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        params: &GeneratorParams,
        rng: &mut R,
    ) -> Result<Series, GeneratorError> {
        params.validate()?;
        let start = self.start_date()?;

        debug!(
            base_value = params.base_value,
            variance = params.variance_fraction,
            trend = params.trend_fraction,
            start = %start,
            "generating daily series"
        );

        let mut points = Vec::with_capacity(SERIES_LENGTH);
        for index in 0..SERIES_LENGTH {
            let date = start.add_days(index as u64)?;
            let uniform: f64 = rng.gen();
            points.push(DataPoint::new(date, params.value_at(index, uniform)));
        }

        Ok(Series::new(points))
    }
}

impl Default for TimeSeriesGenerator<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}
