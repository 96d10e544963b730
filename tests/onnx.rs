#![cfg(feature = "onx")]

use headline_sentiment::nlp::onnx::{best_class, truncation, MAX_TOKENS};

#[test]
fn softmax_picks_highest_logit() {
    let (idx, score) = best_class(&[-2.0, 3.0]).unwrap();
    assert_eq!(idx, 1);
    let expected = 1.0 / (1.0 + (-5.0f64).exp());
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn equal_logits_split_confidence() {
    let (_, score) = best_class(&[0.5, 0.5]).unwrap();
    assert!((score - 0.5).abs() < 1e-12);
}

#[test]
fn empty_logits_have_no_class() {
    assert!(best_class(&[]).is_none());
}

#[test]
fn encodings_are_capped_at_the_position_limit() {
    let params = truncation();
    assert_eq!(params.max_length, MAX_TOKENS);
    assert_eq!(params.stride, 0);
}
