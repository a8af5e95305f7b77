//! Peak extraction over hourly series with missing or invalid samples.

use indexmap::IndexMap;

use crate::{data::measurement::HourlyMeasurement, risk::thresholds::Pollutant};

/// Shape of a raw series once invalid samples are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Absent,
    Empty,
    /// Finite samples only; may be empty if every raw sample was invalid.
    Present(Vec<f64>),
}

impl Series {
    pub fn classify(raw: Option<&[f64]>) -> Self {
        match raw {
            None => Series::Absent,
            Some([]) => Series::Empty,
            Some(samples) => Series::Present(
                samples
                    .iter()
                    .copied()
                    .filter(|value| value.is_finite())
                    .collect(),
            ),
        }
    }

    /// Maximum valid sample. Absent, empty and all-invalid series have none.
    pub fn peak(&self) -> Option<f64> {
        match self {
            Series::Absent | Series::Empty => None,
            Series::Present(samples) => samples.iter().copied().reduce(f64::max),
        }
    }
}

/// Reduce an hourly series to its maximum finite sample.
pub fn extract_peak(series: Option<&[f64]>) -> Option<f64> {
    Series::classify(series).peak()
}

/// Peak of every reported pollutant, in display order.
pub fn peaks_of(measurement: &HourlyMeasurement) -> IndexMap<Pollutant, Option<f64>> {
    Pollutant::ALL
        .into_iter()
        .map(|pollutant| (pollutant, extract_peak(measurement.series(pollutant))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_non_finite_samples() {
        let series = [12.0, f64::NAN, 30.0, f64::NEG_INFINITY, 5.0, f64::INFINITY];
        assert_eq!(extract_peak(Some(&series)), Some(30.0));
    }

    #[test]
    fn no_valid_samples_is_none_not_zero() {
        assert_eq!(extract_peak(None), None);
        assert_eq!(extract_peak(Some(&[])), None);
        assert_eq!(extract_peak(Some(&[f64::NAN, f64::NAN])), None);
    }

    #[test]
    fn classify_distinguishes_missing_from_empty() {
        assert_eq!(Series::classify(None), Series::Absent);
        assert_eq!(Series::classify(Some(&[])), Series::Empty);
        assert_eq!(
            Series::classify(Some(&[f64::NAN, 2.0])),
            Series::Present(vec![2.0])
        );
    }

    #[test]
    fn negative_peaks_are_kept() {
        assert_eq!(extract_peak(Some(&[-3.0, -1.5])), Some(-1.5));
    }
}
