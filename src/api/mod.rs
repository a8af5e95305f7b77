//! HTTP layer exposing risk reports to the rendering front end.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{config::Settings, data::client::AirQualityClient};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: AirQualityClient,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self> {
        let client = AirQualityClient::new(&settings)?;
        Ok(Self { settings, client })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/risk", post(routes::risk_report))
        .route("/chart", post(routes::chart_frame))
        .route("/impact", get(routes::classify_impact))
        .route("/labels", get(routes::hourly_labels))
        .route("/region", get(routes::region_markers))
        .route("/dashboard/:lat/:lon", get(routes::location_dashboard))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState::new(settings)?;
    let router = router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving air-risk API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down air-risk API");
}
