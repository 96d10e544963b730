mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use common::StubSource;
use headline_sentiment::{
    analysis::{aggregate::overall_sentiment, Dominant, Pipeline},
    api::{router, types::AnalyzeResponse, AppState},
    data::store::ReportStore,
    nlp::{lexicon::LexiconModel, Classifier},
};
use tower::ServiceExt;

fn app(source: StubSource, dir: &std::path::Path) -> Router {
    let pipeline = Pipeline::new(
        Arc::new(source),
        Classifier::new(Arc::new(LexiconModel::default())),
        ReportStore::new(dir),
        7,
    );
    router(AppState { pipeline })
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn analyze_returns_report_for_fixture_ticker() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(StubSource::down(), dir.path())
        .oneshot(analyze_request(r#"{"ticker":"aapl"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: AnalyzeResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.ticker, "AAPL");
    assert!(body.fallback);
    assert_eq!(body.articles.len(), 5);
    assert_eq!(body.overall_statistics.total(), 5);
    assert_eq!(
        body.dominant,
        Dominant::from_statistics(&body.overall_statistics)
    );
    assert_eq!(
        body.overall_sentiment,
        overall_sentiment(&body.overall_statistics)
    );
    assert!(body.overall_sentiment <= 100);
    assert!(body.summary.contains("SENTIMENT ANALYSIS SUMMARY FOR AAPL"));
    assert!(std::path::Path::new(&body.output).exists());
}

#[tokio::test]
async fn invalid_ticker_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(StubSource::down(), dir.path())
        .oneshot(analyze_request(r#"{"ticker":"   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_feed_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(StubSource::live(vec![]), dir.path())
        .oneshot(analyze_request(r#"{"ticker":"MSFT"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_answers_ok() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(StubSource::down(), dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn analyze_reports_overall_sentiment_score() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(StubSource::down(), dir.path())
        .oneshot(analyze_request(r#"{"ticker":"TSLA"}"#))
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let stats = &raw["overall_statistics"];
    let total = stats["positive_count"].as_u64().unwrap()
        + stats["negative_count"].as_u64().unwrap()
        + stats["neutral_count"].as_u64().unwrap();
    let weighted = stats["positive_count"].as_u64().unwrap() * 100
        + stats["neutral_count"].as_u64().unwrap() * 50;
    let expected = (weighted as f64 / total as f64).round() as u64;
    assert_eq!(raw["overall_sentiment"].as_u64(), Some(expected));
}
