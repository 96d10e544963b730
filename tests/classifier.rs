mod common;

use std::sync::Arc;

use common::ScriptedModel;
use headline_sentiment::nlp::{
    lexicon::LexiconModel, truncate_chars, Classifier, SentimentLabel, SentimentModel,
    MAX_INPUT_CHARS,
};

#[test]
fn blank_input_skips_the_model() {
    let model = Arc::new(ScriptedModel::constant("POSITIVE", 0.99));
    let classifier = Classifier::new(model.clone());
    for text in ["", "   ", "\n\t "] {
        let result = classifier.classify(text).unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.5);
    }
    assert!(model.calls().is_empty());
}

#[test]
fn long_input_is_cut_to_model_limit() {
    let model = Arc::new(ScriptedModel::constant("NEGATIVE", 0.8));
    let classifier = Classifier::new(model.clone());
    let text = "é".repeat(MAX_INPUT_CHARS + 100);
    classifier.classify(&text).unwrap();
    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].chars().count(), MAX_INPUT_CHARS);
}

#[test]
fn model_answer_passes_through_unmodified() {
    let model = Arc::new(ScriptedModel::new(&[("LABEL_1", 0.123456), ("POSITIVE", 1.7)]));
    let classifier = Classifier::new(model);
    let first = classifier.classify("Quarterly update").unwrap();
    assert_eq!(first.label, SentimentLabel::Other("LABEL_1".into()));
    assert_eq!(first.score, 0.123456);
    let second = classifier.classify("Another update").unwrap();
    assert_eq!(second.score, 1.7);
}

#[test]
fn truncation_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("short", 512), "short");
    assert_eq!(truncate_chars("", 3), "");
}

#[test]
fn labels_keep_their_wire_form() {
    let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
    assert_eq!(json, "\"POSITIVE\"");
    let other: SentimentLabel = serde_json::from_str("\"MIXED\"").unwrap();
    assert_eq!(other, SentimentLabel::Other("MIXED".into()));
    assert_eq!(other.to_string(), "MIXED");
}

#[test]
fn lexicon_reads_financial_polarity() {
    let model = LexiconModel::default();
    let up = model
        .predict("Apple announces record-breaking quarterly earnings. Strong revenue growth.")
        .unwrap();
    assert_eq!(up.label, SentimentLabel::Positive);
    assert!(up.score > 0.5 && up.score < 1.0);

    let down = model
        .predict("Concerns over Apple's supply chain. Analysts express worries about disruptions.")
        .unwrap();
    assert_eq!(down.label, SentimentLabel::Negative);
    assert!(down.score > 0.5 && down.score < 1.0);
}

#[test]
fn lexicon_negation_flips_polarity() {
    let model = LexiconModel::default();
    assert!(model.polarity("Company sees growth") > 0.0);
    assert!(model.polarity("Company sees no growth") < 0.0);
}

#[test]
fn lexicon_without_cues_is_neutral() {
    let model = LexiconModel::default();
    let result = model.predict("Board meeting scheduled for Tuesday").unwrap();
    assert_eq!(result.label, SentimentLabel::Neutral);
    assert_eq!(result.score, 0.5);
}
