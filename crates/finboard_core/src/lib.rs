//! # finboard_core: Foundation Types for the finboard Metrics Engine
//!
//! ## Foundation Layer Role
//!
//! finboard_core is the bottom layer of the workspace, providing:
//! - Calendar dates: `Date` (`types::time`)
//! - Series values: `DataPoint`, `Series` (`types::data_point`, `types::series`)
//! - Filtering intervals: `DateRange` (`types::date_range`)
//! - An injectable source of "today": `Clock`, `SystemClock`, `FixedClock` (`clock`)
//! - Error types: `DateError` (`types::error`)
//!
//! The foundation layer has no dependencies on other finboard crates and
//! keeps external dependencies minimal:
//! - chrono: Calendar arithmetic
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use finboard_core::types::{DataPoint, Date, DateRange, Series};
//!
//! let jan = Date::from_ymd(2024, 1, 1).unwrap();
//! let series = Series::new(vec![DataPoint::new(jan, 100.0)]);
//! let range = DateRange::new(jan, Date::from_ymd(2024, 1, 31).unwrap());
//!
//! assert!(series.iter().all(|p| range.contains(p.date())));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, DataPoint, Series, DateRange

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod clock;
pub mod types;
