//! Resolution of command flags against the loaded configuration.
//!
//! Flags win over configuration, which already carries environment
//! overrides. A missing seed is drawn from entropy and logged so the run can
//! be reproduced.

use finboard_core::clock::{Clock, SystemClock};
use finboard_core::types::{Date, DateRange};
use finboard_series::dashboard::DashboardData;
use finboard_series::generator::TimeSeriesGenerator;
use finboard_series::preset::{DateRangePreset, DateRangeSelection};
use finboard_series::rng::SeriesRng;
use finboard_series::tabs::UserTab;
use tracing::info;

use crate::config::FinboardConfig;
use crate::output::OutputFormat;
use crate::Result;

/// Flags shared by every dashboard command.
#[derive(Debug, Clone, Default)]
pub struct DashboardArgs {
    /// Base seed
    pub seed: Option<u64>,
    /// User tab
    pub user: Option<String>,
    /// Output format
    pub format: Option<String>,
}

/// Flags selecting a date range.
#[derive(Debug, Clone, Default)]
pub struct RangeArgs {
    /// Preset name
    pub preset: Option<String>,
    /// Custom range start (YYYY-MM-DD)
    pub start: Option<String>,
    /// Custom range end (YYYY-MM-DD)
    pub end: Option<String>,
}

/// A resolved tab, seed and output format bound to a clock.
#[derive(Debug, Clone)]
pub struct Session<C = SystemClock> {
    /// Selected user tab
    pub tab: UserTab,
    /// Base seed of the tab streams
    pub seed: u64,
    /// Output format
    pub format: OutputFormat,
    generator: TimeSeriesGenerator<C>,
}

impl Session<SystemClock> {
    /// Resolve a session reading "today" from the system clock.
    pub fn resolve(config: &FinboardConfig, args: &DashboardArgs) -> Result<Self> {
        Self::with_clock(config, args, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Resolve a session against an explicit clock.
    pub fn with_clock(config: &FinboardConfig, args: &DashboardArgs, clock: C) -> Result<Self> {
        let tab: UserTab = args.user.as_deref().unwrap_or(&config.user).parse()?;
        let format: OutputFormat = args.format.as_deref().unwrap_or(&config.format).parse()?;
        let seed = match args.seed.or(config.seed) {
            Some(seed) => seed,
            None => {
                let seed = SeriesRng::from_entropy().seed();
                info!(seed, "no seed configured, drew one from entropy");
                seed
            }
        };

        Ok(Self {
            tab,
            seed,
            format,
            generator: TimeSeriesGenerator::new(clock),
        })
    }

    /// Clock the session reads "today" from.
    pub fn clock(&self) -> &C {
        self.generator.clock()
    }

    /// Generate the selected tab's dashboard.
    pub fn dashboard(&self) -> Result<DashboardData> {
        Ok(self.tab.dashboard(&self.generator, self.seed)?)
    }

    /// Resolve the date range selected by `args` and `config`.
    pub fn range(&self, config: &FinboardConfig, args: &RangeArgs) -> Result<DateRange> {
        let selection = selection(config, args)?;
        Ok(selection.resolve(self.clock())?)
    }
}

fn parse_bound(flag: Option<&str>, fallback: Option<Date>) -> Result<Option<Date>> {
    match flag {
        Some(text) => Ok(Some(Date::parse(text)?)),
        None => Ok(fallback),
    }
}

/// Build the date-range selection from flags, falling back to configuration.
pub fn selection(config: &FinboardConfig, args: &RangeArgs) -> Result<DateRangeSelection> {
    let preset: DateRangePreset = args.preset.as_deref().unwrap_or(&config.preset).parse()?;
    let start = parse_bound(args.start.as_deref(), config.start)?;
    let end = parse_bound(args.end.as_deref(), config.end)?;
    Ok(DateRangeSelection::from_parts(preset, start, end)?)
}
