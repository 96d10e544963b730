//! HTTP layer exposing ticker analyses as JSON.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{analysis::Pipeline, cli::ModelKind, config::Settings};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Build the API router around `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(routes::analyze))
        .route("/api/health", get(routes::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn serve(settings: Settings, model: ModelKind, host: String, port: u16) -> Result<()> {
    let pipeline = Pipeline::from_settings(&settings, model, false)?;
    let app = router(AppState { pipeline });

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving headline-sentiment API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
