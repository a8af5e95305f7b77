//! CLI entry-point for assembling a location dashboard.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, dashboard, data::client::AirQualityClient};

/// Args for the `dashboard` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = AirQualityClient::new(&settings)?;
    let dashboard = dashboard::load(&client, args.lat, args.lon).await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
