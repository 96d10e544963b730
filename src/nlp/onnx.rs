//! DistilBERT SST-2 classifier served through ONNX Runtime.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array2, CowArray};
use ort::{
    tensor::OrtOwnedTensor, Environment, GraphOptimizationLevel, Session, SessionBuilder, Value,
};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::info;

use super::{SentimentLabel, SentimentModel, SentimentResult};
use crate::error::AnalysisError;

/// Output index to label mapping of the SST-2 head.
const LABELS: [&str; 2] = ["NEGATIVE", "POSITIVE"];

/// Position limit of DistilBERT, special tokens included.
pub const MAX_TOKENS: usize = 512;

pub struct OnnxModel {
    session: Session,
    tokenizer: Tokenizer,
}

impl OnnxModel {
    /// Load `model.onnx` and `tokenizer.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let model_path = dir.join("model.onnx");
        let tokenizer_path = dir.join("tokenizer.json");
        for path in [&model_path, &tokenizer_path] {
            if !path.exists() {
                return Err(AnalysisError::ModelUnavailable(format!(
                    "expected {} not found",
                    path.display()
                ))
                .into());
            }
        }
        let environment = Environment::builder()
            .with_name("headline-sentiment")
            .build()?
            .into_arc();
        let session = SessionBuilder::new(&environment)?
            .with_optimization_level(GraphOptimizationLevel::Level1)?
            .with_model_from_file(&model_path)
            .with_context(|| format!("load {}", model_path.display()))?;
        let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(anyhow::Error::msg)?;
        tokenizer
            .with_truncation(Some(truncation()))
            .map_err(anyhow::Error::msg)?;
        info!(path = %model_path.display(), "loaded onnx sentiment model");
        Ok(Self { session, tokenizer })
    }
}

impl SentimentModel for OnnxModel {
    fn name(&self) -> &'static str {
        "onnx-sst2"
    }

    fn predict(&self, text: &str) -> Result<SentimentResult> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(anyhow::Error::msg)?;
        let ids: Vec<i64> = encoding.get_ids().iter().map(|&v| i64::from(v)).collect();
        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&v| i64::from(v))
            .collect();
        let len = ids.len();
        let ids = CowArray::from(Array2::from_shape_vec((1, len), ids)?.into_dyn());
        let mask = CowArray::from(Array2::from_shape_vec((1, len), mask)?.into_dyn());
        let inputs = vec![
            Value::from_array(self.session.allocator(), &ids)?,
            Value::from_array(self.session.allocator(), &mask)?,
        ];
        let outputs = self.session.run(inputs)?;
        let logits: OrtOwnedTensor<f32, _> = outputs[0].try_extract()?;
        let logits: Vec<f32> = logits.view().iter().copied().collect();
        let (idx, score) = best_class(&logits).context("model returned no logits")?;
        let label = LABELS
            .get(idx)
            .map(|l| SentimentLabel::from(*l))
            .unwrap_or_else(|| SentimentLabel::Other(format!("LABEL_{idx}")));
        Ok(SentimentResult::new(label, score))
    }
}

/// Truncation applied to every encoding so long inputs fit the model.
pub fn truncation() -> TruncationParams {
    TruncationParams {
        max_length: MAX_TOKENS,
        ..Default::default()
    }
}

/// Index and softmax probability of the highest-scoring logit.
pub fn best_class(logits: &[f32]) -> Option<(usize, f64)> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return None;
    }
    let exps: Vec<f64> = logits.iter().map(|&l| f64::from(l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(idx, e)| (idx, e / total))
}
