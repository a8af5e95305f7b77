//! CLI entry-point for the regional marker overview.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument, warn};

use crate::{
    api::types::MarkerDto,
    config::Settings,
    data::{
        client::{AirQualityClient, RegionBounds},
        measurement::RegionPoint,
    },
    risk::RiskReport,
};

/// Args for the `map` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Grid spacing in degrees; defaults to AIR_REGION_STEP.
    #[arg(long)]
    pub step: Option<f64>,
    /// Only list the worst N points by AQI.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// Query an explicit bounding box instead of the Kazakhstan grid,
    /// as lat_start,lat_end,lon_start,lon_end.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub bounds: Option<Vec<f64>>,
    /// Also fetch hourly series for the listed points and count elevated pollutants.
    #[arg(long)]
    pub risk: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let step = args.step.unwrap_or(settings.region_step);
    let client = AirQualityClient::new(&settings)?;

    let region = match args.bounds.as_deref() {
        Some(&[lat_start, lat_end, lon_start, lon_end]) => {
            let bounds = RegionBounds {
                lat_start,
                lat_end,
                lon_start,
                lon_end,
            };
            client.fetch_region(bounds, step).await
        }
        Some(other) => bail!("--bounds takes 4 values, got {}", other.len()),
        None => client.fetch_kazakhstan(step).await,
    }
    .context("failed to fetch regional grid")?;
    info!(points = region.data.len(), "fetched regional grid");

    let worst = worst_points(region.data, args.top);

    let issue_counts = if args.risk {
        count_issues(&client, &worst).await
    } else {
        vec![None; worst.len()]
    };

    for (point, issues) in worst.into_iter().zip(issue_counts) {
        let marker = MarkerDto::from(point);
        let issues = issues.map_or_else(|| "-".to_string(), |n| n.to_string());
        println!(
            "{:>8.3} {:>9.3}  AQI {:>6.1}  {:<7} issues {:>2}  {}",
            marker.latitude, marker.longitude, marker.aqi, marker.color.as_str(), issues, marker.status
        );
    }
    Ok(())
}

/// Highest-AQI points first; NaN AQI sorts last.
pub fn worst_points(mut points: Vec<RegionPoint>, top: usize) -> Vec<RegionPoint> {
    points.sort_by(|a, b| match (a.aqi.is_nan(), b.aqi.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.aqi.partial_cmp(&a.aqi).unwrap_or(Ordering::Equal),
    });
    points.truncate(top);
    points
}

async fn count_issues(client: &AirQualityClient, points: &[RegionPoint]) -> Vec<Option<usize>> {
    let concurrency = 4usize;
    stream::iter(points.iter().map(|p| (p.latitude, p.longitude)))
        .map(|(lat, lon)| async move {
            match client.fetch_single_location_series(lat, lon).await {
                Ok(measurement) => Some(RiskReport::from_measurement(&measurement).issues.len()),
                Err(err) => {
                    warn!(lat, lon, %err, "skipping risk for point");
                    None
                }
            }
        })
        .buffered(concurrency)
        .collect()
        .await
}
