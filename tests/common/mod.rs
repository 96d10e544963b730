#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use headline_sentiment::{
    data::news::{NewsRecord, NewsSource},
    error::SourceError,
    nlp::{SentimentModel, SentimentResult},
};

pub fn record(title: &str, description: &str) -> NewsRecord {
    NewsRecord {
        title: title.to_string(),
        description: description.to_string(),
        source: "Wire".to_string(),
        url: String::new(),
        published_at: "2025-09-28".to_string(),
    }
}

/// News source answering with fixed records, or failing when `records` is `None`.
pub struct StubSource {
    records: Option<Vec<NewsRecord>>,
}

impl StubSource {
    pub fn live(records: Vec<NewsRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn down() -> Self {
        Self { records: None }
    }
}

#[async_trait]
impl NewsSource for StubSource {
    async fn fetch(&self, _ticker: &str, _days_back: u32) -> Result<Vec<NewsRecord>, SourceError> {
        self.records.clone().ok_or(SourceError::Unauthorized)
    }
}

/// Model replaying canned answers in order and remembering its inputs.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<SentimentResult>>,
    pub seen: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: &[(&str, f64)]) -> Self {
        Self {
            replies: Mutex::new(
                replies
                    .iter()
                    .map(|(label, score)| SentimentResult::new(*label, *score))
                    .collect(),
            ),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A model that always answers `label`/`score`.
    pub fn constant(label: &str, score: f64) -> Self {
        Self::new(&[(label, score); 64])
    }

    pub fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl SentimentModel for ScriptedModel {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn predict(&self, text: &str) -> Result<SentimentResult> {
        self.seen.lock().unwrap().push(text.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted"))
    }
}

/// Model that always errors.
pub struct BrokenModel;

impl SentimentModel for BrokenModel {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn predict(&self, _text: &str) -> Result<SentimentResult> {
        Err(anyhow!("model crashed"))
    }
}
