//! Headline analysis pipeline: fetch, classify, aggregate, summarise, persist.

pub mod aggregate;
pub mod summary;

use std::{fmt, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    cli::ModelKind,
    config::Settings,
    data::{
        news::{self, NewsApiSource, NewsRecord, NewsSource},
        normalize,
        store::ReportStore,
    },
    error::AnalysisError,
    nlp::{self, Classifier, SentimentLabel, SentimentResult},
};

pub use aggregate::{aggregate, OverallStatistics};
pub use summary::{summarize, Dominant};

/// A headline together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(flatten)]
    pub record: NewsRecord,
    pub sentiment: SentimentLabel,
    /// Model score rounded to three decimals.
    pub confidence: f64,
}

impl AnalyzedArticle {
    pub fn new(record: NewsRecord, result: SentimentResult) -> Self {
        Self {
            record,
            sentiment: result.label,
            confidence: aggregate::round_to(result.score, 3),
        }
    }

    /// Label and rounded confidence as fed to the aggregator.
    pub fn sentiment_result(&self) -> SentimentResult {
        SentimentResult::new(self.sentiment.clone(), self.confidence)
    }
}

/// Persisted outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub analysis_date: DateTime<Utc>,
    pub overall_statistics: OverallStatistics,
    pub articles: Vec<AnalyzedArticle>,
}

/// Everything a caller needs to present a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub report: AnalysisReport,
    pub summary: String,
    pub dominant: Dominant,
    /// Whether the headlines came from fixture data.
    pub fallback: bool,
    pub output: PathBuf,
}

/// Linear pipeline stages; a run only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Fetch,
    Classify,
    Aggregate,
    Summarize,
    Persist,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Classify => "classify",
            Self::Aggregate => "aggregate",
            Self::Summarize => "summarize",
            Self::Persist => "persist",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Wiring of news source, classifier and report store.
#[derive(Clone)]
pub struct Pipeline {
    source: Arc<dyn NewsSource>,
    classifier: Classifier,
    store: ReportStore,
    days_back: u32,
}

impl Pipeline {
    pub fn new(
        source: Arc<dyn NewsSource>,
        classifier: Classifier,
        store: ReportStore,
        days_back: u32,
    ) -> Self {
        Self {
            source,
            classifier,
            store,
            days_back,
        }
    }

    /// Build the production pipeline: NewsAPI source, requested model, outputs dir.
    pub fn from_settings(settings: &Settings, model: ModelKind, write_csv: bool) -> Result<Self> {
        let source = NewsApiSource::new(settings).context("building news client")?;
        let classifier = Classifier::new(nlp::load_model(settings, model)?);
        let store = ReportStore::new(&settings.outputs_dir).with_csv(write_csv);
        Ok(Self::new(
            Arc::new(source),
            classifier,
            store,
            settings.news_days_back,
        ))
    }

    pub fn with_days_back(mut self, days_back: u32) -> Self {
        self.days_back = days_back;
        self
    }

    /// Run one analysis for `ticker`.
    ///
    /// Fails with [`AnalysisError::InvalidTicker`] for malformed symbols and
    /// [`AnalysisError::EmptyResult`] when no headlines are available, in which
    /// case nothing is persisted. Classifier errors abort the run.
    #[instrument(skip(self), fields(model = self.classifier.model_name()))]
    pub async fn run(&self, ticker: &str) -> Result<PipelineRun> {
        let ticker = normalize::ticker(ticker)?;

        enter(Stage::Fetch);
        let outcome = news::fetch_with_fallback(self.source.as_ref(), &ticker, self.days_back).await;
        let fallback = outcome.is_fallback();
        let records = outcome.into_records();
        if records.is_empty() {
            return Err(AnalysisError::EmptyResult { ticker }.into());
        }
        info!(count = records.len(), fallback, "headlines ready");

        enter(Stage::Classify);
        let articles = classify_records(&self.classifier, records)?;

        enter(Stage::Aggregate);
        let results: Vec<SentimentResult> =
            articles.iter().map(AnalyzedArticle::sentiment_result).collect();
        let overall_statistics = aggregate(&results);

        enter(Stage::Summarize);
        let dominant = Dominant::from_statistics(&overall_statistics);
        let summary = summarize(&ticker, &overall_statistics)?;

        enter(Stage::Persist);
        let report = AnalysisReport {
            ticker,
            analysis_date: Utc::now(),
            overall_statistics,
            articles,
        };
        let output = self.store.persist(&report).await?;

        enter(Stage::Done);
        info!(%dominant, path = %output.display(), "analysis complete");
        Ok(PipelineRun {
            report,
            summary,
            dominant,
            fallback,
            output,
        })
    }
}

/// Classify each record in order, pairing it with its result.
pub fn classify_records(
    classifier: &Classifier,
    records: Vec<NewsRecord>,
) -> Result<Vec<AnalyzedArticle>> {
    records
        .into_iter()
        .map(|record| {
            let result = classifier
                .classify(&record.classification_text())
                .with_context(|| format!("classifying {:?}", record.title))?;
            Ok(AnalyzedArticle::new(record, result))
        })
        .collect()
}

fn enter(stage: Stage) {
    debug!(%stage, "entering stage");
}
