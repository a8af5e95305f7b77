//! HTTP client for the remote air-quality and health-impact service.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    config::Settings,
    data::measurement::{HourlyMeasurement, ImpactInputs, RegionResponse},
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected health impact payload: {0}")]
    ImpactPayload(String),
}

/// Bounding box of a regional grid request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionBounds {
    pub lat_start: f64,
    pub lat_end: f64,
    pub lon_start: f64,
    pub lon_end: f64,
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self {
            lat_start: 0.0,
            lat_end: 180.0,
            lon_start: 0.0,
            lon_end: 180.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
}

impl AirQualityClient {
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent("air-risk/0.1")
            .timeout(settings.http_timeout)
            .gzip(true)
            .build()
            .map_err(|source| ClientError::Http {
                url: settings.api_url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Hourly pollutant history for a single location.
    #[instrument(skip(self))]
    pub async fn fetch_single_location_series(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlyMeasurement, ClientError> {
        self.get_json(
            "/air-quality",
            &[("latitude", latitude), ("longitude", longitude)],
        )
        .await
    }

    /// Aggregated grid readings inside `bounds`.
    #[instrument(skip(self))]
    pub async fn fetch_region(
        &self,
        bounds: RegionBounds,
        step: f64,
    ) -> Result<RegionResponse, ClientError> {
        self.get_json(
            "/air-quality/all",
            &[
                ("lat_start", bounds.lat_start),
                ("lat_end", bounds.lat_end),
                ("lon_start", bounds.lon_start),
                ("lon_end", bounds.lon_end),
                ("step", step),
            ],
        )
        .await
    }

    /// Aggregated grid readings over Kazakhstan.
    #[instrument(skip(self))]
    pub async fn fetch_kazakhstan(&self, step: f64) -> Result<RegionResponse, ClientError> {
        self.get_json("/air-quality/kazakhstan", &[("step", step)])
            .await
    }

    /// Predicted health-impact score for the latest samples.
    #[instrument(skip(self))]
    pub async fn fetch_health_impact_score(
        &self,
        inputs: &ImpactInputs,
    ) -> Result<f64, ClientError> {
        let payload: Value = self.get_json("/health-impact", inputs).await?;
        parse_impact_score(&payload)
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "requesting");
        let http_err = |source: reqwest::Error| ClientError::Http {
            url: url.clone(),
            source,
        };
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "air-quality service rejected request");
            return Err(ClientError::Status {
                url: url.clone(),
                status,
            });
        }
        resp.json().await.map_err(http_err)
    }
}

/// Accept `{"prediction": n}`, a bare number, or a numeric string.
pub fn parse_impact_score(payload: &Value) -> Result<f64, ClientError> {
    let score = match payload {
        Value::Object(map) => map.get("prediction").and_then(Value::as_f64),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    score
        .filter(|s| s.is_finite())
        .ok_or_else(|| ClientError::ImpactPayload(payload.to_string()))
}
