//! Folding per-article sentiment into batch statistics.

use serde::{Deserialize, Serialize};

use crate::nlp::{SentimentLabel, SentimentResult};

/// Batch-level sentiment counts, shares and mean confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub average_confidence: f64,
}

impl OverallStatistics {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count + self.neutral_count
    }
}

/// Aggregate `results` into [`OverallStatistics`].
///
/// Only exact `POSITIVE` and `NEGATIVE` labels are counted; every other label
/// lands in the neutral bucket, which is the remainder of the total.
/// Percentages keep one decimal and the mean confidence three, both rounded
/// half away from zero. Empty input yields all zeros.
pub fn aggregate(results: &[SentimentResult]) -> OverallStatistics {
    if results.is_empty() {
        return OverallStatistics::default();
    }
    let total = results.len();
    let positive_count = count(results, &SentimentLabel::Positive);
    let negative_count = count(results, &SentimentLabel::Negative);
    let neutral_count = total - positive_count - negative_count;
    let average_confidence = results.iter().map(|r| r.score).sum::<f64>() / total as f64;

    OverallStatistics {
        positive_count,
        negative_count,
        neutral_count,
        positive_percentage: percentage(positive_count, total),
        negative_percentage: percentage(negative_count, total),
        neutral_percentage: percentage(neutral_count, total),
        average_confidence: round_to(average_confidence, 3),
    }
}

/// Bullishness on a 0-100 scale: positives weigh 100, neutrals 50,
/// negatives 0, averaged and rounded. Zero for an empty batch.
pub fn overall_sentiment(stats: &OverallStatistics) -> u32 {
    let total = stats.total();
    if total == 0 {
        return 0;
    }
    let weighted = stats.positive_count as f64 * 100.0 + stats.neutral_count as f64 * 50.0;
    (weighted / total as f64).round() as u32
}

fn count(results: &[SentimentResult], label: &SentimentLabel) -> usize {
    results.iter().filter(|r| &r.label == label).count()
}

fn percentage(count: usize, total: usize) -> f64 {
    round_to(count as f64 / total as f64 * 100.0, 1)
}

/// Round `value` to `places` decimals, halves away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
