//! Generate command implementation
//!
//! Generates the nine daily series of a user's dashboard.

use tracing::info;

use crate::config::FinboardConfig;
use crate::output::render_dashboard;
use crate::session::{DashboardArgs, Session};
use crate::Result;

/// Run the generate command
pub fn run(config: &FinboardConfig, args: &DashboardArgs) -> Result<()> {
    let session = Session::resolve(config, args)?;
    info!("Generating dashboard...");
    info!("  User: {}", session.tab);
    info!("  Seed: {}", session.seed);

    let data = session.dashboard()?;
    println!("{}", render_dashboard(session.tab, session.seed, &data, session.format)?);

    info!("Generation complete");
    Ok(())
}
