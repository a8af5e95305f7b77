//! CLI entry-point for printing hourly chart labels.

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::risk::timeline::{self, MAX_LABELS};

/// Args for the `labels` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Number of hourly samples on the axis.
    #[arg(long, default_value_t = 24)]
    pub length: usize,
}

#[instrument]
pub async fn run(args: Args) -> Result<()> {
    if args.length > MAX_LABELS {
        bail!("length must not exceed {MAX_LABELS}");
    }
    for label in timeline::hourly_labels_now(args.length) {
        println!("{label}");
    }
    Ok(())
}
