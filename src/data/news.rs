//! News ingestion from a NewsAPI-compatible endpoint with fixture fallback.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use urlencoding::encode;

use crate::{config::Settings, data::fixtures, error::SourceError};

/// Headline record as supplied by a news source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
}

impl NewsRecord {
    /// Text submitted to the classifier: title and description joined by `". "`.
    pub fn classification_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Anything able to list recent headlines for a ticker.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, ticker: &str, days_back: u32) -> Result<Vec<NewsRecord>, SourceError>;
}

/// Records returned by [`fetch_with_fallback`], tagged with their provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Live(Vec<NewsRecord>),
    Fallback(Vec<NewsRecord>),
}

impl FetchOutcome {
    pub fn records(&self) -> &[NewsRecord] {
        match self {
            Self::Live(records) | Self::Fallback(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<NewsRecord> {
        match self {
            Self::Live(records) | Self::Fallback(records) => records,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Query `source`, substituting fixture data when it fails.
///
/// A live source answering with zero records is returned as-is; callers treat
/// that as "no data".
#[instrument(skip(source))]
pub async fn fetch_with_fallback(
    source: &dyn NewsSource,
    ticker: &str,
    days_back: u32,
) -> FetchOutcome {
    match source.fetch(ticker, days_back).await {
        Ok(records) => {
            info!(count = records.len(), "fetched live headlines");
            FetchOutcome::Live(records)
        }
        Err(err) => {
            warn!(
                %err,
                curated = fixtures::has_curated(ticker),
                "news source unavailable; using fixture data"
            );
            FetchOutcome::Fallback(fixtures::for_ticker(ticker))
        }
    }
}

/// Client for the NewsAPI `everything` endpoint.
pub struct NewsApiSource {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    page_size: usize,
}

impl NewsApiSource {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("headline-sentiment/0.1")
            .timeout(Duration::from_secs(settings.news_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            api_key: settings.news_api_key.clone(),
            base_url: settings.news_api_url.clone(),
            page_size: settings.news_page_size,
        })
    }

    fn request_url(&self, ticker: &str, days_back: u32, api_key: &str) -> String {
        let to = Utc::now();
        let from = to - ChronoDuration::days(i64::from(days_back));
        let query = format!("{ticker} stock OR {ticker} shares");
        format!(
            "{base}?q={q}&from={from}&to={to}&sortBy=publishedAt&language=en&pageSize={size}&apiKey={key}",
            base = self.base_url,
            q = encode(&query),
            from = from.format("%Y-%m-%d"),
            to = to.format("%Y-%m-%d"),
            size = self.page_size,
            key = encode(api_key),
        )
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn fetch(&self, ticker: &str, days_back: u32) -> Result<Vec<NewsRecord>, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        let url = self.request_url(ticker, days_back, api_key);
        info!(%ticker, days_back, "requesting headlines");
        let resp = self.client.get(url).send().await?;
        match resp.status() {
            StatusCode::UNAUTHORIZED => return Err(SourceError::Unauthorized),
            status if !status.is_success() => return Err(SourceError::Status(status)),
            _ => {}
        }
        let payload: EverythingResponse = resp.json().await?;
        Ok(payload
            .articles
            .into_iter()
            .map(RawArticle::into_record)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    source: Option<RawSource>,
    url: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl RawArticle {
    fn into_record(self) -> NewsRecord {
        NewsRecord {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            source: self
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            url: self.url.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
        }
    }
}
