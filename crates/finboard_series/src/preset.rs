//! Date-range selection modes.
//!
//! A dashboard selects its filtering window in one of three ways:
//!
//! - **Last month**: the whole previous calendar month
//! - **Last quarter**: the whole previous calendar quarter, rolling into
//!   the previous year when today is in Q1
//! - **Custom**: an arbitrary start/end pair whose end may not be picked
//!   earlier than the start
//!
//! Presets are resolved against an injected [`Clock`].

use std::fmt;
use std::str::FromStr;

use finboard_core::clock::Clock;
use finboard_core::types::{Date, DateError, DateRange};
use tracing::debug;

use crate::error::PresetError;

/// Name of a selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DateRangePreset {
    /// Previous calendar month.
    #[default]
    LastMonth,
    /// Previous calendar quarter.
    LastQuarter,
    /// User-chosen bounds.
    Custom,
}

impl DateRangePreset {
    /// All presets in display order.
    pub const ALL: [DateRangePreset; 3] = [
        DateRangePreset::LastMonth,
        DateRangePreset::LastQuarter,
        DateRangePreset::Custom,
    ];

    /// Returns the canonical preset name.
    pub fn name(&self) -> &'static str {
        match self {
            DateRangePreset::LastMonth => "last-month",
            DateRangePreset::LastQuarter => "last-quarter",
            DateRangePreset::Custom => "custom",
        }
    }

    /// Returns the button caption shown for the preset.
    pub fn caption(&self) -> &'static str {
        match self {
            DateRangePreset::LastMonth => "Last Month",
            DateRangePreset::LastQuarter => "Last Quarter",
            DateRangePreset::Custom => "Custom Range",
        }
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateRangePreset {
    type Err = PresetError;

    /// Parses `last-month`, `last-quarter` or `custom` (case-insensitive;
    /// underscores and camel-case forms such as `lastMonth` are accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "lastmonth" => Ok(DateRangePreset::LastMonth),
            "lastquarter" => Ok(DateRangePreset::LastQuarter),
            "custom" => Ok(DateRangePreset::Custom),
            _ => Err(PresetError::UnknownPreset(s.to_string())),
        }
    }
}

/// State of the custom start/end picker.
///
/// The end picker's minimum selectable date is the chosen start, so
/// [`CustomRange::with_end`] clamps an earlier end up to the start. Moving
/// the start keeps the previously chosen end, even when that leaves the
/// range inverted; filtering then selects nothing.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::Date;
/// use finboard_series::preset::CustomRange;
///
/// let start = Date::from_ymd(2024, 3, 10).unwrap();
/// let picker = CustomRange::new(start, start)
///     .with_end(Date::from_ymd(2024, 3, 1).unwrap());
/// assert_eq!(picker.end(), start);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomRange {
    start: Date,
    end: Date,
}

impl CustomRange {
    /// Creates a picker state; an end before `start` is clamped to `start`.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end: clamp_end(start, end),
        }
    }

    /// Chosen start date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Chosen end date.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Earliest date the end picker offers.
    pub fn min_end_date(&self) -> Date {
        self.start
    }

    /// Picks a new start, keeping the current end.
    pub fn with_start(self, start: Date) -> Self {
        Self { start, ..self }
    }

    /// Picks a new end, clamped to the current start.
    pub fn with_end(self, end: Date) -> Self {
        Self {
            end: clamp_end(self.start, end),
            ..self
        }
    }

    /// The selected interval.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

fn clamp_end(start: Date, end: Date) -> Date {
    if end < start {
        debug!(start = %start, requested_end = %end, "custom end before start, clamping");
        start
    } else {
        end
    }
}

/// A resolved choice of selection mode, carrying custom bounds when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeSelection {
    /// Previous calendar month.
    #[default]
    LastMonth,
    /// Previous calendar quarter.
    LastQuarter,
    /// User-chosen bounds.
    Custom(CustomRange),
}

impl DateRangeSelection {
    /// Builds a selection from a preset name and optional custom bounds.
    ///
    /// Bounds are ignored for the calendar presets. A custom end earlier
    /// than the start is clamped to the start, as [`CustomRange::new`] does.
    ///
    /// # Errors
    ///
    /// `PresetError::MissingCustomBounds` when `Custom` lacks either bound.
    pub fn from_parts(
        preset: DateRangePreset,
        start: Option<Date>,
        end: Option<Date>,
    ) -> Result<Self, PresetError> {
        match preset {
            DateRangePreset::LastMonth => Ok(DateRangeSelection::LastMonth),
            DateRangePreset::LastQuarter => Ok(DateRangeSelection::LastQuarter),
            DateRangePreset::Custom => match (start, end) {
                (Some(start), Some(end)) => {
                    Ok(DateRangeSelection::Custom(CustomRange::new(start, end)))
                }
                _ => Err(PresetError::MissingCustomBounds),
            },
        }
    }

    /// The preset this selection was made with.
    pub fn preset(&self) -> DateRangePreset {
        match self {
            DateRangeSelection::LastMonth => DateRangePreset::LastMonth,
            DateRangeSelection::LastQuarter => DateRangePreset::LastQuarter,
            DateRangeSelection::Custom(_) => DateRangePreset::Custom,
        }
    }

    /// Resolves the selection to a concrete interval relative to `clock`.
    pub fn resolve<C: Clock + ?Sized>(&self, clock: &C) -> Result<DateRange, PresetError> {
        let range = match self {
            DateRangeSelection::LastMonth => last_month(clock.today())?,
            DateRangeSelection::LastQuarter => last_quarter(clock.today())?,
            DateRangeSelection::Custom(custom) => custom.range(),
        };
        debug!(preset = %self.preset(), range = %range, "resolved date range");
        Ok(range)
    }
}

/// The calendar month before the one containing `today`.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::Date;
/// use finboard_series::preset::last_month;
///
/// let range = last_month(Date::from_ymd(2024, 3, 15).unwrap()).unwrap();
/// assert_eq!(range.start_date, Date::from_ymd(2024, 2, 1).unwrap());
/// assert_eq!(range.end_date, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
pub fn last_month(today: Date) -> Result<DateRange, DateError> {
    let month0 = today.month0() as i32;
    let start = Date::month_start(today.year(), month0 - 1)?;
    let end = Date::month_start(today.year(), month0)?.pred()?;
    Ok(DateRange::new(start, end))
}

/// The calendar quarter before the one containing `today`.
///
/// # Examples
///
/// ```rust
/// use finboard_core::types::Date;
/// use finboard_series::preset::last_quarter;
///
/// let range = last_quarter(Date::from_ymd(2024, 1, 20).unwrap()).unwrap();
/// assert_eq!(range.start_date, Date::from_ymd(2023, 10, 1).unwrap());
/// assert_eq!(range.end_date, Date::from_ymd(2023, 12, 31).unwrap());
/// ```
pub fn last_quarter(today: Date) -> Result<DateRange, DateError> {
    let quarter = (today.month0() / 3) as i32;
    let start = Date::month_start(today.year(), (quarter - 1) * 3)?;
    let end = Date::month_start(today.year(), quarter * 3)?.pred()?;
    Ok(DateRange::new(start, end))
}
