//! HTTP route handlers for Axum.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::warn;

use crate::{
    api::types::{ImpactDto, MarkerDto, RiskReportDto},
    dashboard::{self, Dashboard},
    data::measurement::HourlyMeasurement,
    risk::{
        impact,
        timeline::{self, ChartFrame},
        RiskReport,
    },
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn health() -> &'static str {
    "ok"
}

pub async fn risk_report(Json(measurement): Json<HourlyMeasurement>) -> Json<RiskReportDto> {
    Json(RiskReport::from_measurement(&measurement).into())
}

#[derive(Debug, Deserialize)]
pub struct ImpactQuery {
    pub score: Option<f64>,
}

pub async fn classify_impact(Query(query): Query<ImpactQuery>) -> Json<ImpactDto> {
    let level = impact::classify(query.score);
    Json(ImpactDto::new(query.score, level))
}

#[derive(Debug, Deserialize)]
pub struct LabelsQuery {
    pub length: usize,
}

pub async fn hourly_labels(Query(query): Query<LabelsQuery>) -> ApiResult<Vec<String>> {
    if query.length > timeline::MAX_LABELS {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("length must not exceed {}", timeline::MAX_LABELS),
        ));
    }
    Ok(Json(timeline::hourly_labels_now(query.length)))
}

pub async fn chart_frame(Json(measurement): Json<HourlyMeasurement>) -> ApiResult<ChartFrame> {
    ChartFrame::build(&measurement, &Local::now())
        .map(Json)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))
}

pub async fn location_dashboard(
    Path((latitude, longitude)): Path<(f64, f64)>,
    states: State<AppState>,
) -> ApiResult<Dashboard> {
    dashboard::load(&states.client, latitude, longitude)
        .await
        .map(Json)
        .map_err(|err| {
            warn!(latitude, longitude, error = ?err, "dashboard failed");
            (StatusCode::BAD_GATEWAY, "Failed to fetch hourly data".to_string())
        })
}

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub step: Option<f64>,
}

pub async fn region_markers(
    states: State<AppState>,
    Query(query): Query<RegionQuery>,
) -> ApiResult<Vec<MarkerDto>> {
    let step = query.step.unwrap_or(states.settings.region_step);
    let region = states.client.fetch_kazakhstan(step).await.map_err(|err| {
        warn!(%err, "region fetch failed");
        (StatusCode::BAD_GATEWAY, err.to_string())
    })?;
    Ok(Json(region.data.into_iter().map(MarkerDto::from).collect()))
}
