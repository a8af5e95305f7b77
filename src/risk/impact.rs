//! Health-impact severity levels for the externally predicted score.

use serde::Serialize;
use tracing::debug;

/// One of the six ordered severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevel {
    pub index: u8,
    pub label: &'static str,
    pub color_class: &'static str,
    pub description: &'static str,
}

pub const SEVERITY_LEVELS: [SeverityLevel; 6] = [
    SeverityLevel {
        index: 0,
        label: "Good",
        color_class: "bg-green-100 text-green-800",
        description: "Air quality is satisfactory and poses little or no risk.",
    },
    SeverityLevel {
        index: 1,
        label: "Moderate",
        color_class: "bg-yellow-100 text-yellow-800",
        description: "Air quality is acceptable; some pollutants may be a concern for a few sensitive people.",
    },
    SeverityLevel {
        index: 2,
        label: "Unhealthy for Sensitive Groups",
        color_class: "bg-orange-100 text-orange-800",
        description: "Sensitive groups may experience health effects; general public is unlikely to be affected.",
    },
    SeverityLevel {
        index: 3,
        label: "Unhealthy",
        color_class: "bg-red-100 text-red-800",
        description: "Everyone may begin to experience adverse health effects.",
    },
    SeverityLevel {
        index: 4,
        label: "Very Unhealthy",
        color_class: "bg-purple-100 text-purple-800",
        description: "Health alert: everyone may experience more serious effects.",
    },
    SeverityLevel {
        index: 5,
        label: "Hazardous",
        color_class: "bg-rose-200 text-rose-900",
        description: "Emergency conditions: serious health effects for entire population.",
    },
];

/// Message shown when no score could be obtained.
pub const UNAVAILABLE: &str = "Health impact data unavailable";

/// Look up the severity for an integer score, clamped into the table.
pub fn classify_index(score: i64) -> &'static SeverityLevel {
    let last = SEVERITY_LEVELS.len() as i64 - 1;
    let index = score.max(0).min(last);
    if index != score {
        debug!(score, index, "clamped out-of-range health impact score");
    }
    &SEVERITY_LEVELS[index as usize]
}

/// Map the predictor's score to a severity level.
///
/// `None` (and NaN) mean the score is unavailable and must not be rendered as
/// a severity. Fractional scores round to the nearest integer with ties away
/// from zero before clamping; infinities clamp like any other outlier.
pub fn classify(score: Option<f64>) -> Option<&'static SeverityLevel> {
    let score = score.filter(|s| !s.is_nan())?;
    // `as` saturates, so infinities land on i64::MIN/MAX and clamp below.
    Some(classify_index(score.round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indices_match_positions() {
        for (position, level) in SEVERITY_LEVELS.iter().enumerate() {
            assert_eq!(level.index as usize, position);
            assert!(!level.description.is_empty());
        }
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(classify(Some(-3.0)).unwrap().label, "Good");
        assert_eq!(classify(Some(9.0)).unwrap().label, "Hazardous");
        assert_eq!(classify_index(i64::MIN).index, 0);
        assert_eq!(classify(Some(f64::INFINITY)).unwrap().index, 5);
        assert_eq!(classify(Some(f64::NEG_INFINITY)).unwrap().index, 0);
    }

    #[test]
    fn missing_score_is_not_a_severity() {
        assert_eq!(classify(None), None);
        assert_eq!(classify(Some(f64::NAN)), None);
    }

    #[test]
    fn fractional_scores_round_half_away_from_zero() {
        assert_eq!(classify(Some(2.5)).unwrap().index, 3);
        assert_eq!(classify(Some(2.49)).unwrap().index, 2);
        assert_eq!(classify(Some(-0.5)).unwrap().index, 0);
        assert_eq!(classify(Some(4.5)).unwrap().index, 5);
    }
}
