//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::{
    api::types::{AnalyzeRequest, AnalyzeResponse},
    error::AnalysisError,
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<AnalyzeResponse> {
    let run = state
        .pipeline
        .run(&request.ticker)
        .await
        .map_err(error_response)?;
    Ok(Json(run.into()))
}

pub async fn health() -> &'static str {
    "ok"
}

fn error_response(err: anyhow::Error) -> (StatusCode, String) {
    let status = match err.downcast_ref::<AnalysisError>() {
        Some(AnalysisError::InvalidTicker(_)) => StatusCode::BAD_REQUEST,
        Some(AnalysisError::EmptyResult { .. }) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        warn!(error = ?err, "analysis failed");
    }
    (status, err.to_string())
}
