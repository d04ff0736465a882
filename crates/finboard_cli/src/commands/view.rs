//! View command implementation
//!
//! Prints the monthly chart series of a dashboard for the selected range.

use tracing::info;

use crate::config::FinboardConfig;
use crate::output::render_view;
use crate::session::{DashboardArgs, RangeArgs, Session};
use crate::Result;

/// Run the view command
pub fn run(config: &FinboardConfig, args: &DashboardArgs, range_args: &RangeArgs) -> Result<()> {
    let session = Session::resolve(config, args)?;
    let range = session.range(config, range_args)?;
    info!("Building dashboard view...");
    info!("  User: {}", session.tab);
    info!("  Seed: {}", session.seed);
    info!("  Range: {}", range);

    let view = session.dashboard()?.view(&range);
    println!("{}", render_view(session.tab, session.seed, &view, session.format)?);

    info!("View complete ({} months)", view.revenue.len());
    Ok(())
}
