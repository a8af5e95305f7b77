//! Hour labels for the shared chart x-axis.

use std::fmt;

use chrono::{DateTime, Duration, Local, TimeZone};
use serde::Serialize;
use thiserror::Error;

use crate::{data::measurement::HourlyMeasurement, risk::thresholds::Pollutant};

const LABEL_FORMAT: &str = "%Y-%m-%d %H:00";

/// Longest axis callers may request: one leap year of hourly samples.
pub const MAX_LABELS: usize = 24 * 366;

/// Build `length` hour labels whose last entry is `reference`'s hour.
///
/// Each label is exactly 3600 seconds before its successor. The function
/// knows nothing about the series it labels.
pub fn build_hourly_labels<Tz>(length: usize, reference: &DateTime<Tz>) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    (0..length)
        .map(|i| {
            let hours_back = (length - 1 - i) as i64;
            let stamp = reference.clone() - Duration::hours(hours_back);
            stamp.format(LABEL_FORMAT).to_string()
        })
        .collect()
}

/// Labels anchored at the current instant in the process's local time zone.
pub fn hourly_labels_now(length: usize) -> Vec<String> {
    build_hourly_labels(length, &Local::now())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("series {series} has {found} samples but the time axis has {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub key: &'static str,
    pub label: &'static str,
    pub data: Vec<f64>,
}

/// Labels plus every series of a location, all of the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartFrame {
    /// Align all series of `measurement` on one hour axis ending at `reference`.
    ///
    /// The axis length comes from the PM10 series. Absent series plot as
    /// empty lines; a present series of any other length is rejected.
    pub fn build<Tz>(
        measurement: &HourlyMeasurement,
        reference: &DateTime<Tz>,
    ) -> Result<Self, AlignmentError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let expected = measurement.series(Pollutant::Pm10).map_or(0, <[f64]>::len);

        let mut candidates: Vec<(&'static str, &'static str, Option<&[f64]>)> =
            vec![("aqi", "AQI", measurement.aqi_series())];
        candidates.extend(
            Pollutant::ALL
                .into_iter()
                .map(|p| (p.key(), p.label(), measurement.series(p))),
        );

        let mut series = Vec::with_capacity(candidates.len());
        for (key, label, samples) in candidates {
            let data = match samples {
                Some(samples) if samples.len() != expected => {
                    return Err(AlignmentError::LengthMismatch {
                        series: key,
                        expected,
                        found: samples.len(),
                    });
                }
                Some(samples) => samples.to_vec(),
                None => Vec::new(),
            };
            series.push(ChartSeries { key, label, data });
        }

        Ok(Self {
            labels: build_hourly_labels(expected, reference),
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn longest_axis_spans_a_leap_year() {
        let reference = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let labels = build_hourly_labels(MAX_LABELS, &reference);
        assert_eq!(labels.len(), 8784);
        assert_eq!(labels[0], "2024-01-01 00:00");
    }

    #[test]
    fn last_label_is_the_reference_hour() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 1, 1, 42, 7).unwrap();
        let labels = build_hourly_labels(4, &reference);
        assert_eq!(
            labels,
            vec![
                "2024-02-29 22:00",
                "2024-02-29 23:00",
                "2024-03-01 00:00",
                "2024-03-01 01:00",
            ]
        );
    }

    #[test]
    fn zero_length_is_empty() {
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(build_hourly_labels(0, &reference).is_empty());
    }

    #[test]
    fn labels_render_in_the_reference_zone() {
        let almaty = FixedOffset::east_opt(5 * 3600).unwrap();
        let reference = almaty.with_ymd_and_hms(2024, 6, 10, 0, 15, 0).unwrap();
        let labels = build_hourly_labels(2, &reference);
        assert_eq!(labels, vec!["2024-06-09 23:00", "2024-06-10 00:00"]);
    }

    #[test]
    fn chart_frame_rejects_mismatched_series() {
        let measurement = HourlyMeasurement {
            pm10: Some(vec![1.0, 2.0, 3.0]),
            co: Some(vec![0.1, 0.2]),
            ..Default::default()
        };
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let err = ChartFrame::build(&measurement, &reference).unwrap_err();
        assert_eq!(
            err,
            AlignmentError::LengthMismatch {
                series: "co",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn chart_frame_plots_absent_series_as_empty() {
        let measurement = HourlyMeasurement {
            aqi_hourly: Some(vec![50.0, 60.0]),
            pm10: Some(vec![1.0, 2.0]),
            ..Default::default()
        };
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let frame = ChartFrame::build(&measurement, &reference).unwrap();
        assert_eq!(frame.labels.len(), 2);
        assert_eq!(frame.series.len(), 7);
        assert_eq!(frame.series[0].key, "aqi");
        let co = frame.series.iter().find(|s| s.key == "co").unwrap();
        assert!(co.data.is_empty());
    }
}
