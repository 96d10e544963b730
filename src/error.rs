//! Typed failures callers branch on; everything else travels as `anyhow::Error`.

use thiserror::Error;

/// Failures of a live news source. All of them are recovered with fixture data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no news API key configured")]
    MissingApiKey,
    #[error("news API rejected the API key")]
    Unauthorized,
    #[error("news API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("news API request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Terminal outcomes of an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid ticker symbol: {0:?}")]
    InvalidTicker(String),
    #[error("no news articles found for {ticker}")]
    EmptyResult { ticker: String },
    #[error("sentiment model unavailable: {0}")]
    ModelUnavailable(String),
}
