//! Shared DTOs for JSON responses.

use serde::Serialize;

use crate::{
    data::{markers::MarkerColor, measurement::RegionPoint},
    risk::{
        impact::{SeverityLevel, UNAVAILABLE},
        symptoms::RiskIssue,
        ReportRow, RiskReport,
    },
};

#[derive(Debug, Clone, Serialize)]
pub struct RiskReportDto {
    pub rows: Vec<ReportRow>,
    pub issues: Vec<RiskIssue>,
    pub summary: Vec<String>,
}

impl From<RiskReport> for RiskReportDto {
    fn from(report: RiskReport) -> Self {
        RiskReportDto {
            rows: report.rows(),
            summary: report.summary_lines(),
            issues: report.issues,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactDto {
    pub available: bool,
    pub score: Option<f64>,
    pub level: Option<SeverityLevel>,
    pub message: String,
}

impl ImpactDto {
    pub fn new(score: Option<f64>, level: Option<&SeverityLevel>) -> Self {
        match level {
            Some(level) => ImpactDto {
                available: true,
                score,
                level: Some(*level),
                message: level.description.to_string(),
            },
            None => ImpactDto {
                available: false,
                score: None,
                level: None,
                message: UNAVAILABLE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerDto {
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: f64,
    pub status: String,
    pub color: MarkerColor,
}

impl From<RegionPoint> for MarkerDto {
    fn from(point: RegionPoint) -> Self {
        MarkerDto {
            color: MarkerColor::for_aqi(point.aqi),
            latitude: point.latitude,
            longitude: point.longitude,
            aqi: point.aqi,
            status: point.status,
        }
    }
}
