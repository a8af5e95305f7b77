//! Wire models returned by the remote air-quality service.

use serde::{Deserialize, Deserializer, Serialize};

use crate::risk::thresholds::Pollutant;

/// One location's hourly pollutant history, oldest sample first.
///
/// Samples that arrive as JSON `null` are kept as `NaN` so that indices stay
/// aligned with the hour axis; the risk engine filters them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyMeasurement {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub aqi_hourly: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub pm10: Option<Vec<f64>>,
    #[serde(rename = "pm2_5", default, deserialize_with = "lenient_samples")]
    pub pm25: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub co: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub no2: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub so2: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient_samples")]
    pub o3: Option<Vec<f64>>,
}

impl HourlyMeasurement {
    /// Hourly series recorded for a pollutant, if the service sent one.
    pub fn series(&self, pollutant: Pollutant) -> Option<&[f64]> {
        let series = match pollutant {
            Pollutant::Pm25 => &self.pm25,
            Pollutant::Pm10 => &self.pm10,
            Pollutant::No2 => &self.no2,
            Pollutant::O3 => &self.o3,
            Pollutant::So2 => &self.so2,
            Pollutant::Co => &self.co,
        };
        series.as_deref()
    }

    pub fn aqi_series(&self) -> Option<&[f64]> {
        self.aqi_hourly.as_deref()
    }
}

fn lenient_samples<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|samples| {
        samples
            .into_iter()
            .map(|sample| sample.unwrap_or(f64::NAN))
            .collect()
    }))
}

/// Most recent sample of a series, or `0.0` when absent, empty or invalid.
pub fn latest_sample(series: Option<&[f64]>) -> f64 {
    series
        .and_then(|samples| samples.last().copied())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Query inputs for the remote health-impact predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactInputs {
    pub aqi: f64,
    pub pm10: f64,
    pub pm2_5: f64,
    pub co: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
}

impl ImpactInputs {
    /// Take the latest sample of every series.
    pub fn from_measurement(measurement: &HourlyMeasurement) -> Self {
        Self {
            aqi: latest_sample(measurement.aqi_series()),
            pm10: latest_sample(measurement.series(Pollutant::Pm10)),
            pm2_5: latest_sample(measurement.series(Pollutant::Pm25)),
            co: latest_sample(measurement.series(Pollutant::Co)),
            no2: latest_sample(measurement.series(Pollutant::No2)),
            so2: latest_sample(measurement.series(Pollutant::So2)),
            o3: latest_sample(measurement.series(Pollutant::O3)),
        }
    }
}

/// Aggregated reading for one grid cell of the regional overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    pub status: String,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(rename = "pm2_5", default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionResponse {
    pub data: Vec<RegionPoint>,
}
