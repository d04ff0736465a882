//! Summary command implementation
//!
//! Prints the headline figures and expense shares for the selected range.

use finboard_series::summary::DashboardSummary;
use tracing::info;

use crate::config::FinboardConfig;
use crate::output::render_summary;
use crate::session::{DashboardArgs, RangeArgs, Session};
use crate::Result;

/// Run the summary command
pub fn run(config: &FinboardConfig, args: &DashboardArgs, range_args: &RangeArgs) -> Result<()> {
    let session = Session::resolve(config, args)?;
    let range = session.range(config, range_args)?;
    info!("Summarising dashboard...");
    info!("  User: {}", session.tab);
    info!("  Range: {}", range);

    let view = session.dashboard()?.view(&range);
    let summary = DashboardSummary::from_view(&view);
    println!(
        "{}",
        render_summary(session.tab, session.seed, &view, &summary, session.format)?
    );

    info!("Summary complete");
    Ok(())
}
