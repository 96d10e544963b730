//! Runtime configuration utilities for headline-sentiment.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::Deserialize;

use crate::cli::ModelKind;

const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// NewsAPI key. `None` (or the `demo` placeholder) forces fixture data.
    pub news_api_key: Option<String>,
    /// Endpoint queried for live headlines.
    pub news_api_url: String,
    /// Days of history requested from the news source.
    pub news_days_back: u32,
    /// Maximum headlines requested per analysis.
    pub news_page_size: usize,
    /// HTTP timeout applied to the news source.
    pub news_timeout_secs: u64,
    /// Sentiment backend used when the CLI does not override it.
    pub model: ModelKind,
    /// Root folder for model artefacts.
    pub data_dir: PathBuf,
    /// Root folder for persisted reports.
    pub outputs_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let news_api_key = env::var("NEWS_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != "demo");
        let news_api_url =
            env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());
        let model = env::var("SENTIMENT_MODEL")
            .ok()
            .and_then(|v| v.parse::<ModelKind>().ok())
            .unwrap_or(ModelKind::Lexicon);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            news_api_key,
            news_api_url,
            news_days_back: parsed_var("NEWS_DAYS_BACK", 7),
            news_page_size: parsed_var("NEWS_PAGE_SIZE", 10),
            news_timeout_secs: parsed_var("NEWS_TIMEOUT_SECS", 10),
            model,
            data_dir,
            outputs_dir,
        })
    }

    /// Offline settings rooted at `root`; no API key, lexicon model.
    pub fn offline<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            news_api_key: None,
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
            news_days_back: 7,
            news_page_size: 10,
            news_timeout_secs: 10,
            model: ModelKind::Lexicon,
            data_dir: root.join("data"),
            outputs_dir: root.join("outputs"),
        }
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}

fn parsed_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
