//! Rule-based financial lexicon classifier, the default sentiment backend.

use std::collections::HashMap;

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{SentimentLabel, SentimentModel, SentimentResult};

const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("beat", 0.6),
    ("beats", 0.6),
    ("boost", 0.5),
    ("breakthrough", 0.7),
    ("bullish", 0.8),
    ("exceed", 0.6),
    ("exceeding", 0.6),
    ("exceeds", 0.6),
    ("expands", 0.5),
    ("gain", 0.5),
    ("gains", 0.5),
    ("growth", 0.6),
    ("high", 0.4),
    ("impress", 0.6),
    ("impressive", 0.6),
    ("optimistic", 0.6),
    ("outperform", 0.7),
    ("positive", 0.5),
    ("praise", 0.6),
    ("profit", 0.6),
    ("promising", 0.6),
    ("rally", 0.7),
    ("rebound", 0.5),
    ("record", 0.6),
    ("record-breaking", 0.7),
    ("recovery", 0.5),
    ("rise", 0.5),
    ("soar", 0.8),
    ("soars", 0.8),
    ("strong", 0.5),
    ("surge", 0.7),
    ("surges", 0.7),
    ("upgrade", 0.6),
    ("upgrades", 0.6),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("bearish", -0.8),
    ("challenges", -0.5),
    ("concern", -0.5),
    ("concerns", -0.5),
    ("crash", -0.9),
    ("decline", -0.6),
    ("declines", -0.6),
    ("disruption", -0.5),
    ("disruptions", -0.5),
    ("downgrade", -0.6),
    ("drop", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("fear", -0.6),
    ("headwinds", -0.5),
    ("lawsuit", -0.6),
    ("layoffs", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("miss", -0.6),
    ("misses", -0.6),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("risk", -0.4),
    ("scrutinize", -0.4),
    ("uncertainty", -0.5),
    ("volatility", -0.3),
    ("weak", -0.5),
    ("worries", -0.5),
    ("worry", -0.5),
];

const NEGATIONS: &[&str] = &["no", "not", "never", "without", "hardly", "isn't", "doesn't"];

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z][a-z'\-]*").expect("valid regex"));

/// Weighted term lexicon with single-token negation.
pub struct LexiconModel {
    weights: HashMap<&'static str, f64>,
}

impl Default for LexiconModel {
    fn default() -> Self {
        let weights = POSITIVE_TERMS
            .iter()
            .chain(NEGATIVE_TERMS)
            .copied()
            .collect();
        Self { weights }
    }
}

impl LexiconModel {
    /// Net polarity of `text`; positive values lean bullish.
    pub fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut previous: Option<&str> = None;
        let mut net = 0.0;
        for token in TOKEN.find_iter(&lower).map(|m| m.as_str()) {
            if let Some(weight) = self.weights.get(token) {
                let negated = previous.is_some_and(|p| NEGATIONS.iter().any(|n| *n == p));
                net += if negated { -weight } else { *weight };
            }
            previous = Some(token);
        }
        net
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn predict(&self, text: &str) -> Result<SentimentResult> {
        let net = self.polarity(text);
        if net.abs() < 1e-9 {
            return Ok(SentimentResult::new(SentimentLabel::Neutral, 0.5));
        }
        let label = if net > 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        };
        Ok(SentimentResult::new(label, 0.5 + 0.5 * net.abs().tanh()))
    }
}
