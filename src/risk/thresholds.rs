//! WHO short-term guideline thresholds and peak elevation checks.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pollutants covered by the risk report, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "pm2_5")]
    Pm25,
    #[serde(rename = "pm10")]
    Pm10,
    #[serde(rename = "no2")]
    No2,
    #[serde(rename = "o3")]
    O3,
    #[serde(rename = "so2")]
    So2,
    #[serde(rename = "co")]
    Co,
}

/// Guideline concentration per pollutant. CO is in mg/m³, the rest in µg/m³.
pub const THRESHOLDS: [(Pollutant, f64); 6] = [
    (Pollutant::Pm25, 15.0),
    (Pollutant::Pm10, 45.0),
    (Pollutant::No2, 25.0),
    (Pollutant::O3, 100.0),
    (Pollutant::So2, 40.0),
    (Pollutant::Co, 4.0),
];

impl Pollutant {
    /// Fixed display order of the tabular report.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Key used by the remote service payloads.
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }

    /// Concentration unit. Formatting must go through this, never a default.
    pub fn unit(self) -> &'static str {
        match self {
            Pollutant::Co => "mg/m³",
            _ => "µg/m³",
        }
    }

    pub fn threshold(self) -> f64 {
        THRESHOLDS
            .iter()
            .find(|(pollutant, _)| *pollutant == self)
            .map(|(_, threshold)| *threshold)
            .unwrap_or(f64::INFINITY)
    }

    /// Look up a pollutant by its payload key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Peak compared against its guideline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantEvaluation {
    pub value: Option<f64>,
    pub threshold: f64,
    pub elevated: bool,
}

pub type Evaluations = IndexMap<Pollutant, PollutantEvaluation>;

/// Compare every pollutant's peak against its threshold, in display order.
///
/// Pollutants missing from `peaks` are evaluated as having no valid samples.
/// Elevation is strictly greater-than: a peak equal to the guideline is fine.
pub fn evaluate(peaks: &IndexMap<Pollutant, Option<f64>>) -> Evaluations {
    Pollutant::ALL
        .into_iter()
        .map(|pollutant| {
            let value = peaks.get(&pollutant).copied().flatten();
            let threshold = pollutant.threshold();
            let elevated = value.is_some_and(|v| v > threshold);
            trace!(%pollutant, ?value, threshold, elevated, "evaluated peak");
            (
                pollutant,
                PollutantEvaluation {
                    value,
                    threshold,
                    elevated,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pollutant_has_a_threshold() {
        for pollutant in Pollutant::ALL {
            assert!(pollutant.threshold().is_finite(), "{pollutant}");
        }
        assert_eq!(Pollutant::O3.threshold(), 100.0);
        assert_eq!(Pollutant::Co.threshold(), 4.0);
    }

    #[test]
    fn only_carbon_monoxide_uses_milligrams() {
        assert_eq!(Pollutant::Co.unit(), "mg/m³");
        for pollutant in Pollutant::ALL.into_iter().filter(|p| *p != Pollutant::Co) {
            assert_eq!(pollutant.unit(), "µg/m³");
        }
    }

    #[test]
    fn keys_round_trip() {
        for pollutant in Pollutant::ALL {
            assert_eq!(Pollutant::from_key(pollutant.key()), Some(pollutant));
        }
        assert_eq!(Pollutant::from_key("nh3"), None);
    }

    #[test]
    fn output_follows_display_order_regardless_of_input_order() {
        let mut peaks = IndexMap::new();
        peaks.insert(Pollutant::Co, Some(1.0));
        peaks.insert(Pollutant::Pm25, Some(3.0));
        let evaluations = evaluate(&peaks);
        let order: Vec<_> = evaluations.keys().copied().collect();
        assert_eq!(order, Pollutant::ALL.to_vec());
        assert_eq!(evaluations[&Pollutant::No2].value, None);
        assert!(!evaluations[&Pollutant::No2].elevated);
    }

    #[test]
    fn equality_is_not_elevated() {
        let mut peaks = IndexMap::new();
        peaks.insert(Pollutant::Pm25, Some(15.0));
        peaks.insert(Pollutant::Pm10, Some(45.01));
        let evaluations = evaluate(&peaks);
        assert!(!evaluations[&Pollutant::Pm25].elevated);
        assert!(evaluations[&Pollutant::Pm10].elevated);
    }
}
