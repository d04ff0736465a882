//! # finboard_series: Series Engine for the finboard Dashboard
//!
//! Generates synthetic daily series and derives the monthly chart series a
//! financial dashboard displays.
//!
//! ## Pipeline
//!
//! The composition order is fixed:
//!
//! ```text
//! generate → filter_by_range → aggregate_monthly → format_month_label
//! ```
//!
//! Every stage is a pure function over immutable input except generation,
//! which draws from a caller-supplied random source and reads "today" from a
//! caller-supplied [`Clock`](finboard_core::clock::Clock).
//!
//! ## Modules
//!
//! - [`generator`]: One-year daily walk with linear trend and uniform noise
//! - [`rng`]: Seedable random source with per-stream derivation
//! - [`filter`]: Inclusive date-range filtering
//! - [`aggregate`]: Monthly averaging
//! - [`format`]: Chart axis labels
//! - [`preset`]: Last-month, last-quarter and custom date-range selection
//! - [`dashboard`]: The nine-series dashboard bundle and its monthly views
//! - [`summary`]: Headline figures and expense shares
//! - [`allocation`]: Portfolio split across asset classes
//! - [`tabs`]: Per-user dashboards with independent random streams
//!
//! ## Usage Example
//!
//! ```rust
//! use finboard_core::clock::FixedClock;
//! use finboard_core::types::Date;
//! use finboard_series::prelude::*;
//!
//! let clock = FixedClock::new(Date::from_ymd(2024, 10, 19).unwrap());
//! let generator = TimeSeriesGenerator::new(clock);
//! let mut rng = SeriesRng::from_seed(42);
//!
//! let revenue = generator
//!     .generate(&GeneratorParams::new(75_000.0).with_variance(0.15).with_trend(0.05), &mut rng)
//!     .unwrap();
//!
//! let range = DateRangeSelection::LastQuarter.resolve(&clock).unwrap();
//! let monthly = aggregate_monthly(&filter_by_range(&revenue, &range));
//! let labels: Vec<String> = monthly.dates().map(format_month_label).collect();
//! assert_eq!(labels, ["Jul 2024", "Aug 2024", "Sep 2024"]);
//! ```

#![warn(missing_docs)]

pub mod aggregate;
pub mod allocation;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod format;
pub mod generator;
pub mod preset;
pub mod rng;
pub mod summary;
pub mod tabs;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{aggregate_monthly, MonthKey};
    pub use crate::allocation::{AllocationShare, AssetAllocation, AssetClass};
    pub use crate::dashboard::{DashboardData, DashboardView, ExpenseCategory, Metric};
    pub use crate::error::{AllocationError, GeneratorError, PresetError, UnknownTab};
    pub use crate::filter::filter_by_range;
    pub use crate::format::{format_month_label, label_by_month};
    pub use crate::generator::{GeneratorParams, TimeSeriesGenerator, SERIES_LENGTH};
    pub use crate::preset::{CustomRange, DateRangePreset, DateRangeSelection};
    pub use crate::rng::SeriesRng;
    pub use crate::summary::DashboardSummary;
    pub use crate::tabs::UserTab;
}
