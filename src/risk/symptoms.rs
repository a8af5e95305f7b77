//! Health-symptom annotations for pollutants above their guideline.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::risk::thresholds::{Evaluations, Pollutant};

/// Used only if a pollutant is ever missing from [`SYMPTOMS`].
pub const GENERIC_SYMPTOMS: &str = "Respiratory symptoms are possible";

const SYMPTOMS: &[(Pollutant, &str)] = &[
    (
        Pollutant::Pm25,
        "Increased risk of cardio-respiratory diseases, asthma exacerbation, coughing, shortness of breath, higher mortality with long-term exposure",
    ),
    (
        Pollutant::Pm10,
        "Irritation of the respiratory tract, worsening of chronic lung diseases, increased hospital admissions",
    ),
    (
        Pollutant::No2,
        "Respiratory tract irritation, worsening of asthma symptoms, reduced lung function, increased susceptibility to infections",
    ),
    (
        Pollutant::O3,
        "Coughing, throat/chest pain, worsening of asthma, and reduced lung function during physical activity",
    ),
    (
        Pollutant::So2,
        "Bronchospasm in asthmatics, coughing, irritation of the respiratory tract",
    ),
    (
        Pollutant::Co,
        "Reduced oxygen delivery (especially in people with heart disease): dizziness, weakness; in high doses, risk of stroke or heart attack",
    ),
];

pub fn symptoms_for(pollutant: Pollutant) -> &'static str {
    SYMPTOMS
        .iter()
        .find(|(p, _)| *p == pollutant)
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_SYMPTOMS)
}

/// A pollutant whose peak exceeded its guideline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskIssue {
    pub key: Pollutant,
    pub label: &'static str,
    pub peak_value: f64,
    pub threshold: f64,
    pub unit: &'static str,
    pub symptoms: &'static str,
}

impl RiskIssue {
    /// One-line rendering, e.g. `PM2.5 > 31.2 µg/m³ | Increased risk ...`.
    pub fn display_line(&self) -> String {
        format!(
            "{} > {:.1} {} | {}",
            self.label, self.peak_value, self.unit, self.symptoms
        )
    }
}

/// Pollutants flagged elevated by [`crate::risk::thresholds::evaluate`].
pub fn elevated_keys(evaluations: &Evaluations) -> BTreeSet<Pollutant> {
    evaluations
        .iter()
        .filter(|(_, evaluation)| evaluation.elevated)
        .map(|(pollutant, _)| *pollutant)
        .collect()
}

/// Attach symptom text to every flagged pollutant, in display order.
///
/// Input order and duplicates in `elevated` do not matter. A flagged
/// pollutant without a peak value in `evaluations` is skipped.
pub fn annotate<I>(elevated: I, evaluations: &Evaluations) -> Vec<RiskIssue>
where
    I: IntoIterator<Item = Pollutant>,
{
    let flagged: BTreeSet<Pollutant> = elevated.into_iter().collect();
    Pollutant::ALL
        .into_iter()
        .filter(|pollutant| flagged.contains(pollutant))
        .filter_map(|pollutant| {
            let evaluation = evaluations.get(&pollutant)?;
            let peak_value = evaluation.value?;
            Some(RiskIssue {
                key: pollutant,
                label: pollutant.label(),
                peak_value,
                threshold: evaluation.threshold,
                unit: pollutant.unit(),
                symptoms: symptoms_for(pollutant),
            })
        })
        .collect()
}
