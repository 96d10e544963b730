//! Sentiment classification layer: labels, the model seam and the input adapter.

pub mod lexicon;
#[cfg(feature = "onx")]
pub mod onnx;

use std::{fmt, sync::Arc};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{cli::ModelKind, config::Settings};

/// Characters of input the model accepts; longer text is truncated.
pub const MAX_INPUT_CHARS: usize = 512;

/// Sentiment label as reported by a model.
///
/// Labels other than the three canonical ones are kept verbatim so that
/// aggregation can fold them into the neutral bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus model confidence for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentResult {
    pub fn new(label: impl Into<SentimentLabel>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Result assigned to blank input without consulting a model.
    pub fn blank() -> Self {
        Self::new(SentimentLabel::Neutral, 0.5)
    }
}

/// Text-in, label-out sentiment capability.
pub trait SentimentModel: Send + Sync {
    fn name(&self) -> &'static str;
    fn predict(&self, text: &str) -> Result<SentimentResult>;
}

/// Adapter normalising input before it reaches a [`SentimentModel`].
#[derive(Clone)]
pub struct Classifier {
    model: Arc<dyn SentimentModel>,
}

impl Classifier {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Classify `text`. Blank input short-circuits to NEUTRAL/0.5; anything
    /// else is cut to [`MAX_INPUT_CHARS`] and the model answer is returned
    /// unmodified.
    pub fn classify(&self, text: &str) -> Result<SentimentResult> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::blank());
        }
        let result = self.model.predict(truncate_chars(text, MAX_INPUT_CHARS))?;
        if !(0.0..=1.0).contains(&result.score) {
            warn!(score = result.score, label = %result.label, "model score outside [0, 1]");
        }
        Ok(result)
    }
}

/// Longest prefix of `text` holding at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Load the requested sentiment backend.
pub fn load_model(settings: &Settings, kind: ModelKind) -> Result<Arc<dyn SentimentModel>> {
    info!(?kind, "loading sentiment model");
    match kind {
        ModelKind::Lexicon => Ok(Arc::new(lexicon::LexiconModel::default())),
        ModelKind::Onnx => load_onnx(settings),
    }
}

#[cfg(feature = "onx")]
fn load_onnx(settings: &Settings) -> Result<Arc<dyn SentimentModel>> {
    let model = onnx::OnnxModel::load(&settings.join_data("models/sst2"))?;
    Ok(Arc::new(model))
}

#[cfg(not(feature = "onx"))]
fn load_onnx(_settings: &Settings) -> Result<Arc<dyn SentimentModel>> {
    Err(crate::error::AnalysisError::ModelUnavailable(
        "built without the `onx` feature".to_string(),
    )
    .into())
}
