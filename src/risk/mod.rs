//! Risk and reporting engine: peaks, guideline checks, symptoms, severity.

pub mod impact;
pub mod peak;
pub mod symptoms;
pub mod thresholds;
pub mod timeline;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::data::measurement::HourlyMeasurement;

use self::{
    symptoms::RiskIssue,
    thresholds::{Evaluations, Pollutant},
};

/// Shown in place of a peak when a pollutant has no valid samples.
pub const MISSING_VALUE: &str = "—";

pub const NO_ISSUES: &str = "No pollutant peaks above WHO short-term AQGs.";

/// Row of the tabular risk report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub pollutant: Pollutant,
    pub label: &'static str,
    pub peak: String,
    pub threshold: String,
    pub elevated: bool,
}

/// Peak-versus-guideline report for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub evaluations: Evaluations,
    pub issues: Vec<RiskIssue>,
}

impl RiskReport {
    pub fn from_measurement(measurement: &HourlyMeasurement) -> Self {
        Self::from_peaks(&peak::peaks_of(measurement))
    }

    pub fn from_peaks(peaks: &IndexMap<Pollutant, Option<f64>>) -> Self {
        let evaluations = thresholds::evaluate(peaks);
        let issues = symptoms::annotate(symptoms::elevated_keys(&evaluations), &evaluations);
        debug!(issues = issues.len(), "built risk report");
        Self {
            evaluations,
            issues,
        }
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.evaluations
            .iter()
            .map(|(pollutant, evaluation)| ReportRow {
                pollutant: *pollutant,
                label: pollutant.label(),
                peak: format_peak(*pollutant, evaluation.value),
                threshold: format_threshold(*pollutant),
                elevated: evaluation.elevated,
            })
            .collect()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issue lines, or the explicit all-clear sentence.
    pub fn summary_lines(&self) -> Vec<String> {
        if self.issues.is_empty() {
            return vec![NO_ISSUES.to_string()];
        }
        self.issues.iter().map(RiskIssue::display_line).collect()
    }
}

/// CO peaks get two decimals, everything else one.
pub fn format_peak(pollutant: Pollutant, value: Option<f64>) -> String {
    match value {
        None => MISSING_VALUE.to_string(),
        Some(v) if pollutant == Pollutant::Co => format!("{v:.2} {}", pollutant.unit()),
        Some(v) => format!("{v:.1} {}", pollutant.unit()),
    }
}

pub fn format_threshold(pollutant: Pollutant) -> String {
    format!("{} {}", pollutant.threshold(), pollutant.unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_format_units_by_pollutant() {
        let measurement = HourlyMeasurement {
            pm25: Some(vec![10.0, 18.44]),
            co: Some(vec![0.5, 4.5]),
            ..Default::default()
        };
        let report = RiskReport::from_measurement(&measurement);
        let rows = report.rows();
        assert_eq!(rows[0].peak, "18.4 µg/m³");
        assert_eq!(rows[0].threshold, "15 µg/m³");
        assert!(rows[0].elevated);
        assert_eq!(rows[1].peak, MISSING_VALUE);
        assert!(!rows[1].elevated);
        assert_eq!(rows[5].peak, "4.50 mg/m³");
        assert_eq!(rows[5].threshold, "4 mg/m³");
    }

    #[test]
    fn clean_air_says_so() {
        let measurement = HourlyMeasurement {
            pm10: Some(vec![3.0, 4.0]),
            ..Default::default()
        };
        let report = RiskReport::from_measurement(&measurement);
        assert!(!report.has_issues());
        assert_eq!(report.summary_lines(), vec![NO_ISSUES.to_string()]);
    }
}
