//! CLI entry-point for printing a location's risk report.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    api::types::RiskReportDto,
    cli::OutputFormat,
    config::Settings,
    data::{client::AirQualityClient, measurement::HourlyMeasurement},
    risk::RiskReport,
};

/// Args for the `report` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSON file holding an hourly measurement payload.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub input: Option<PathBuf>,
    /// Latitude to fetch from the remote service.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Longitude to fetch from the remote service.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let measurement = match (&args.input, args.lat, args.lon) {
        (Some(path), _, _) => load_measurement(path).await?,
        (None, Some(lat), Some(lon)) => AirQualityClient::new(&settings)?
            .fetch_single_location_series(lat, lon)
            .await
            .context("failed to fetch hourly data")?,
        _ => bail!("pass either --input or both --lat and --lon"),
    };

    let report = RiskReport::from_measurement(&measurement);
    info!(issues = report.issues.len(), "computed risk report");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

pub async fn load_measurement(path: &Path) -> Result<HourlyMeasurement> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parse measurement from {path:?}"))
}

pub fn render<W: Write>(report: &RiskReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => {
            let dto = RiskReportDto::from(report.clone());
            serde_json::to_writer_pretty(&mut *out, &dto)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_csv(report, out),
    }
}

fn render_text<W: Write>(report: &RiskReport, out: &mut W) -> Result<()> {
    writeln!(out, "Air Quality: Quick Risk Check")?;
    writeln!(
        out,
        "{:<10} {:>14} {:>18}  Status",
        "Pollutant", "Peak value", "WHO short-term AQG"
    )?;
    for row in report.rows() {
        let status = if row.elevated {
            "Elevated"
        } else {
            "Within WHO short-term AQG"
        };
        writeln!(
            out,
            "{:<10} {:>14} {:>18}  {}",
            row.label, row.peak, row.threshold, status
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Detected issues:")?;
    for line in report.summary_lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

fn render_csv<W: Write>(report: &RiskReport, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in report.rows() {
        writer.serialize(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RiskReport {
        RiskReport::from_measurement(&HourlyMeasurement {
            pm25: Some(vec![8.0, 22.5]),
            co: Some(vec![1.0]),
            ..Default::default()
        })
    }

    #[test]
    fn text_lists_all_pollutants_and_issues() {
        let mut out = Vec::new();
        render(&sample_report(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for label in ["PM2.5", "PM10", "NO2", "O3", "SO2", "CO"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("PM2.5 > 22.5 µg/m³ | "));
        assert!(text.contains("1.00 mg/m³"));
    }

    #[test]
    fn csv_has_header_and_six_rows() {
        let mut out = Vec::new();
        render(&sample_report(), OutputFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "pollutant,label,peak,threshold,elevated");
        assert!(lines[1].starts_with("pm2_5,PM2.5,22.5 µg/m³,15 µg/m³,true"));
    }
}
