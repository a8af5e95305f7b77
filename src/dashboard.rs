//! Per-location dashboard assembly from fetched data.

use std::fmt;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    data::{
        client::AirQualityClient,
        measurement::{HourlyMeasurement, ImpactInputs},
    },
    risk::{
        impact::{self, SeverityLevel},
        timeline::ChartFrame,
        RiskReport,
    },
};

/// Everything the location page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub latitude: f64,
    pub longitude: f64,
    pub report: RiskReport,
    pub impact_score: Option<f64>,
    /// `None` renders as "unavailable", never as a default severity.
    pub impact: Option<SeverityLevel>,
    /// Missing when the series cannot share one hour axis.
    pub chart: Option<ChartFrame>,
    pub chart_error: Option<String>,
}

impl Dashboard {
    pub fn assemble<Tz>(
        measurement: &HourlyMeasurement,
        impact_score: Option<f64>,
        reference: &DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let (chart, chart_error) = match ChartFrame::build(measurement, reference) {
            Ok(frame) => (Some(frame), None),
            Err(err) => {
                warn!(%err, "hourly series are not aligned; chart omitted");
                (None, Some(err.to_string()))
            }
        };
        Self {
            latitude: measurement.latitude,
            longitude: measurement.longitude,
            report: RiskReport::from_measurement(measurement),
            impact_score,
            impact: impact::classify(impact_score).copied(),
            chart,
            chart_error,
        }
    }
}

/// Fetch series and score for a location and assemble its dashboard.
///
/// A failed series fetch is an error; a failed score fetch only leaves the
/// impact unavailable.
#[instrument(skip(client))]
pub async fn load(client: &AirQualityClient, latitude: f64, longitude: f64) -> Result<Dashboard> {
    let measurement = client
        .fetch_single_location_series(latitude, longitude)
        .await
        .context("failed to fetch hourly data")?;

    let inputs = ImpactInputs::from_measurement(&measurement);
    let impact_score = match client.fetch_health_impact_score(&inputs).await {
        Ok(score) => Some(score),
        Err(err) => {
            warn!(%err, "health impact unavailable");
            None
        }
    };

    let dashboard = Dashboard::assemble(&measurement, impact_score, &Local::now());
    info!(
        issues = dashboard.report.issues.len(),
        impact = ?dashboard.impact.map(|level| level.label),
        "assembled dashboard"
    );
    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn missing_score_leaves_impact_unavailable() {
        let measurement = HourlyMeasurement {
            latitude: 43.25,
            longitude: 76.95,
            pm10: Some(vec![50.0, 20.0]),
            ..Default::default()
        };
        let reference = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let dashboard = Dashboard::assemble(&measurement, None, &reference);
        assert_eq!(dashboard.impact, None);
        assert_eq!(dashboard.report.issues.len(), 1);
        let chart = dashboard.chart.unwrap();
        assert_eq!(chart.labels.last().unwrap(), "2024-05-01 08:00");
    }

    #[test]
    fn score_is_classified() {
        let measurement = HourlyMeasurement::default();
        let reference = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let dashboard = Dashboard::assemble(&measurement, Some(7.0), &reference);
        assert_eq!(dashboard.impact.unwrap().label, "Hazardous");
        assert!(dashboard.chart.unwrap().labels.is_empty());
    }

    #[test]
    fn misaligned_series_keep_report_and_impact() {
        let measurement = HourlyMeasurement {
            pm25: Some(vec![10.0, 40.0]),
            ..Default::default()
        };
        let reference = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let dashboard = Dashboard::assemble(&measurement, Some(2.0), &reference);
        assert_eq!(dashboard.chart, None);
        assert!(dashboard.chart_error.unwrap().contains("pm2_5"));
        assert_eq!(dashboard.report.issues.len(), 1);
        assert_eq!(dashboard.report.issues[0].peak_value, 40.0);
        assert_eq!(dashboard.impact.unwrap().index, 2);
    }
}
