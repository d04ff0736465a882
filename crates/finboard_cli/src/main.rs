//! finboard CLI - Dashboard Series from the Command Line
//!
//! This is the operational entry point for the finboard series engine.
//!
//! # Commands
//!
//! - `finboard generate` - Generate a user's daily dashboard series
//! - `finboard view --preset last-quarter` - Monthly chart series for a range
//! - `finboard summary` - Headline figures and expense shares for a range
//! - `finboard check` - Validate configuration and smoke-test the pipeline
//!
//! # Configuration
//!
//! Settings are read from `finboard.toml` (see `--config`) when present,
//! then overridden by `FINBOARD_*` environment variables and finally by
//! command-line flags. `RUST_LOG` takes precedence over `log_level`.

use std::path::Path;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;
mod session;

pub use error::{CliError, Result};

use config::FinboardConfig;
use session::{DashboardArgs, RangeArgs};

/// finboard dashboard series CLI
#[derive(Parser)]
#[command(name = "finboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "finboard.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by the dashboard commands
#[derive(Args)]
struct DashboardFlags {
    /// Base seed for the per-user random streams
    #[arg(short, long)]
    seed: Option<u64>,

    /// User tab (user1 to user5)
    #[arg(short, long)]
    user: Option<String>,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<String>,
}

impl From<DashboardFlags> for DashboardArgs {
    fn from(flags: DashboardFlags) -> Self {
        Self {
            seed: flags.seed,
            user: flags.user,
            format: flags.format,
        }
    }
}

/// Flags selecting a date range
#[derive(Args)]
struct RangeFlags {
    /// Date-range preset (last-month, last-quarter, custom)
    #[arg(short, long)]
    preset: Option<String>,

    /// Custom range start (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,

    /// Custom range end (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
}

impl From<RangeFlags> for RangeArgs {
    fn from(flags: RangeFlags) -> Self {
        Self {
            preset: flags.preset,
            start: flags.start,
            end: flags.end,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a user's daily dashboard series
    Generate {
        #[command(flatten)]
        dashboard: DashboardFlags,
    },

    /// Show the monthly chart series for a date range
    View {
        #[command(flatten)]
        dashboard: DashboardFlags,

        #[command(flatten)]
        range: RangeFlags,
    },

    /// Show headline figures and expense shares for a date range
    Summary {
        #[command(flatten)]
        dashboard: DashboardFlags,

        #[command(flatten)]
        range: RangeFlags,
    },

    /// Check configuration and smoke-test the series pipeline
    Check,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn dispatch(command: Commands, config: &FinboardConfig, config_path: &str) -> Result<()> {
    match command {
        Commands::Generate { dashboard } => {
            config.validate()?;
            commands::generate::run(config, &dashboard.into())
        }
        Commands::View { dashboard, range } => {
            config.validate()?;
            commands::view::run(config, &dashboard.into(), &range.into())
        }
        Commands::Summary { dashboard, range } => {
            config.validate()?;
            commands::summary::run(config, &dashboard.into(), &range.into())
        }
        Commands::Check => commands::check::run(config, config_path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = FinboardConfig::load_or_default(Path::new(&cli.config))
        .map(FinboardConfig::with_env_override);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug",
        (Ok(config), false) => config.log_level.as_str(),
        (Err(_), false) => "info",
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = loaded.map_err(|e| {
        error!("Failed to load {}: {}", cli.config, e);
        CliError::from(e)
    })?;

    let result = dispatch(cli.command, &config, &cli.config);

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}
