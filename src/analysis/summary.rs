//! Dominant-sentiment decision rule and narrative report rendering.

use std::fmt;

use anyhow::Result;
use askama::Template;
use serde::{Deserialize, Serialize};

use super::aggregate::OverallStatistics;
use crate::nlp::SentimentLabel;

/// Label characterising a whole batch of headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dominant {
    Positive,
    Negative,
    Neutral,
}

impl Dominant {
    /// Strict comparison of the positive and negative shares; ties are neutral.
    pub fn from_statistics(stats: &OverallStatistics) -> Self {
        if stats.positive_percentage > stats.negative_percentage {
            Self::Positive
        } else if stats.negative_percentage > stats.positive_percentage {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn label(self) -> SentimentLabel {
        match self {
            Self::Positive => SentimentLabel::Positive,
            Self::Negative => SentimentLabel::Negative,
            Self::Neutral => SentimentLabel::Neutral,
        }
    }

    fn insights(self, ticker: &str) -> [String; 2] {
        match self {
            Self::Positive => [
                format!("News sentiment for {ticker} is predominantly positive"),
                "Market appears optimistic about the company's prospects".to_string(),
            ],
            Self::Negative => [
                format!("News sentiment for {ticker} is predominantly negative"),
                "Market shows concerns about the company's performance".to_string(),
            ],
            Self::Neutral => [
                format!("News sentiment for {ticker} is mixed"),
                "Market sentiment appears balanced with no clear direction".to_string(),
            ],
        }
    }
}

impl fmt::Display for Dominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().as_str())
    }
}

#[derive(Template)]
#[template(path = "summary.txt")]
struct SummaryTemplate<'a> {
    ticker: &'a str,
    dominant: Dominant,
    stats: &'a OverallStatistics,
    insights: [String; 2],
}

/// Render the narrative report for `ticker` from its statistics alone.
pub fn summarize(ticker: &str, stats: &OverallStatistics) -> Result<String> {
    let dominant = Dominant::from_statistics(stats);
    let template = SummaryTemplate {
        ticker,
        dominant,
        stats,
        insights: dominant.insights(ticker),
    };
    Ok(template.render()?)
}
