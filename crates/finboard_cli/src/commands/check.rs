//! Check command implementation
//!
//! Validates the configuration and runs a seeded smoke test of the series
//! pipeline.

use finboard_core::clock::{Clock, SystemClock};
use finboard_series::generator::{TimeSeriesGenerator, SERIES_LENGTH};
use finboard_series::preset::DateRangePreset;
use finboard_series::tabs::UserTab;
use tracing::{info, warn};

use crate::config::FinboardConfig;
use crate::{CliError, Result};

const SMOKE_SEED: u64 = 42;

/// Run the check command
pub fn run(config: &FinboardConfig, config_path: &str) -> Result<()> {
    println!("finboard {}", env!("CARGO_PKG_VERSION"));
    println!("  Config file: {}", config_path);
    println!("  Today:       {}", SystemClock.today());

    match config.validate() {
        Ok(()) => println!("  Config:      ok"),
        Err(e) => {
            warn!("{}", e);
            println!("  Config:      {}", e);
            return Err(e.into());
        }
    }

    let generator = TimeSeriesGenerator::new(SystemClock);
    for tab in UserTab::all() {
        let data = tab.dashboard(&generator, SMOKE_SEED)?;
        let series = std::iter::once(&data.revenue)
            .chain([&data.expenses, &data.portfolio])
            .chain(data.expense_breakdown.iter().map(|entry| &entry.series));
        for s in series {
            if s.len() != SERIES_LENGTH || s.values().any(|v| v < 0.0) {
                return Err(CliError::Check(format!(
                    "{} produced an invalid series ({} points)",
                    tab,
                    s.len()
                )));
            }
        }
        if data.asset_allocation.total() != 100 {
            return Err(CliError::Check(format!(
                "{} asset allocation sums to {}%",
                tab,
                data.asset_allocation.total()
            )));
        }
    }
    println!("  Generator:   ok ({} tabs)", UserTab::all().count());

    for preset in DateRangePreset::ALL {
        println!("  Preset:      {} ({})", preset, preset.caption());
    }

    info!("Check complete");
    Ok(())
}
