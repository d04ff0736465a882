//! Core time-series types.
//!
//! This module provides:
//! - `time`: Calendar date type (`Date`)
//! - `data_point`: Dated observation (`DataPoint`)
//! - `series`: Ordered sequence of observations (`Series`)
//! - `date_range`: Inclusive date interval (`DateRange`)
//! - `error`: Structured error types for date operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`DataPoint`] from `data_point`
//! - [`Series`] from `series`
//! - [`DateRange`] from `date_range`
//! - [`DateError`] from `error`

pub mod data_point;
pub mod date_range;
pub mod error;
pub mod series;
pub mod time;

pub use data_point::DataPoint;
pub use date_range::DateRange;
pub use error::DateError;
pub use series::Series;
pub use time::Date;
