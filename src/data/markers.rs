//! AQI colour bands used for regional map markers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

impl MarkerColor {
    /// Band for an AQI value; bands are closed on the upper bound.
    ///
    /// Negative and NaN readings fall outside every band and are drawn yellow.
    pub fn for_aqi(aqi: f64) -> Self {
        match aqi {
            a if (0.0..=50.0).contains(&a) => MarkerColor::Green,
            a if a > 50.0 && a <= 100.0 => MarkerColor::Yellow,
            a if a > 100.0 && a <= 150.0 => MarkerColor::Orange,
            a if a > 150.0 && a <= 200.0 => MarkerColor::Red,
            a if a > 200.0 && a <= 300.0 => MarkerColor::Purple,
            a if a > 300.0 => MarkerColor::Maroon,
            _ => MarkerColor::Yellow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Green => "green",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Orange => "orange",
            MarkerColor::Red => "red",
            MarkerColor::Purple => "purple",
            MarkerColor::Maroon => "maroon",
        }
    }
}
