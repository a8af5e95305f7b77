//! Command-line interface wiring for air-risk.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod dashboard;
pub mod impact;
pub mod labels;
pub mod map;
pub mod report;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Hourly air-quality risk reports", long_about = None)]
pub struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Report(args) => report::run(args, settings).await,
            Commands::Impact(args) => impact::run(args).await,
            Commands::Labels(args) => labels::run(args).await,
            Commands::Dashboard(args) => dashboard::run(args, settings).await,
            Commands::Map(args) => map::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Peak-versus-guideline risk report for one location.
    Report(report::Args),
    /// Classify a health-impact score into a severity level.
    Impact(impact::Args),
    /// Print hourly chart labels ending at the current hour.
    Labels(labels::Args),
    /// Fetch and assemble the full dashboard for a location.
    Dashboard(dashboard::Args),
    /// List regional grid points with their marker colours.
    Map(map::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Rendering of command output on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated rows.
    Csv,
}
