//! Hourly air-quality risk reporting: peak checks against WHO short-term
//! guidelines, health-impact severity, and chart time axes.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod risk;
