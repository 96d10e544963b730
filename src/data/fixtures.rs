//! Canned headlines substituted when the live news source is unreachable.

use crate::data::news::NewsRecord;

type Row = (&'static str, &'static str, &'static str, &'static str);

const AAPL: &[Row] = &[
    (
        "Apple announces record-breaking quarterly earnings",
        "Apple Inc. reported strong revenue growth driven by iPhone sales.",
        "TechNews",
        "2025-09-28",
    ),
    (
        "Apple's new AI features impress analysts",
        "Wall Street analysts praise Apple's latest AI integration in iOS.",
        "MarketWatch",
        "2025-09-27",
    ),
    (
        "Apple stock reaches new all-time high",
        "Shares of Apple hit record levels amid positive market sentiment.",
        "Bloomberg",
        "2025-09-26",
    ),
    (
        "Concerns over Apple's supply chain in Asia",
        "Analysts express worries about potential disruptions in Apple's manufacturing.",
        "Reuters",
        "2025-09-25",
    ),
    (
        "Apple expands services revenue significantly",
        "The company's services division shows impressive growth this quarter.",
        "CNBC",
        "2025-09-24",
    ),
];

const TSLA: &[Row] = &[
    (
        "Tesla delivers record number of vehicles",
        "Tesla reports strong delivery numbers exceeding analyst expectations.",
        "AutoNews",
        "2025-09-28",
    ),
    (
        "Tesla faces regulatory challenges in Europe",
        "European regulators scrutinize Tesla's autonomous driving features.",
        "Reuters",
        "2025-09-27",
    ),
    (
        "Musk announces new Tesla factory location",
        "Tesla plans to build a new manufacturing facility to meet growing demand.",
        "Bloomberg",
        "2025-09-26",
    ),
    (
        "Tesla stock volatility concerns investors",
        "Analysts note increased volatility in Tesla shares amid market uncertainty.",
        "MarketWatch",
        "2025-09-25",
    ),
    (
        "Tesla's energy division shows promising growth",
        "The company's solar and battery storage business expands rapidly.",
        "GreenTech",
        "2025-09-24",
    ),
];

/// Fixture headlines for `ticker`: a curated set for known symbols, otherwise
/// three templated records mentioning the ticker.
pub fn for_ticker(ticker: &str) -> Vec<NewsRecord> {
    match ticker.to_ascii_uppercase().as_str() {
        "AAPL" => from_rows(AAPL),
        "TSLA" => from_rows(TSLA),
        _ => generic(ticker),
    }
}

/// Whether `ticker` has a curated fixture set.
pub fn has_curated(ticker: &str) -> bool {
    matches!(ticker.to_ascii_uppercase().as_str(), "AAPL" | "TSLA")
}

fn from_rows(rows: &[Row]) -> Vec<NewsRecord> {
    rows.iter()
        .map(|(title, description, source, date)| record(title, description, source, date))
        .collect()
}

fn generic(ticker: &str) -> Vec<NewsRecord> {
    vec![
        record(
            &format!("{ticker} shows mixed performance in recent trading"),
            &format!("Shares of {ticker} experience volatility amid market conditions."),
            "Financial Times",
            "2025-09-28",
        ),
        record(
            &format!("{ticker} announces strategic initiatives"),
            "Company reveals new plans to drive growth and shareholder value.",
            "WSJ",
            "2025-09-27",
        ),
        record(
            &format!("Analysts update {ticker} price targets"),
            &format!("Wall Street firms revise their outlook on {ticker} stock."),
            "Barron's",
            "2025-09-26",
        ),
    ]
}

fn record(title: &str, description: &str, source: &str, published_at: &str) -> NewsRecord {
    NewsRecord {
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        url: String::new(),
        published_at: published_at.to_string(),
    }
}
