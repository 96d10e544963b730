//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    aggregate::overall_sentiment, AnalyzedArticle, Dominant, OverallStatistics, PipelineRun,
};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub ticker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub ticker: String,
    pub dominant: Dominant,
    pub fallback: bool,
    pub summary: String,
    /// 0-100 bullishness score for the batch.
    pub overall_sentiment: u32,
    pub overall_statistics: OverallStatistics,
    pub articles: Vec<AnalyzedArticle>,
    pub output: String,
}

impl From<PipelineRun> for AnalyzeResponse {
    fn from(run: PipelineRun) -> Self {
        AnalyzeResponse {
            ticker: run.report.ticker,
            dominant: run.dominant,
            fallback: run.fallback,
            summary: run.summary,
            overall_sentiment: overall_sentiment(&run.report.overall_statistics),
            overall_statistics: run.report.overall_statistics,
            articles: run.report.articles,
            output: run.output.display().to_string(),
        }
    }
}
