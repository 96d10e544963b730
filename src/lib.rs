//! Stock news headline sentiment analysis: news ingestion, classification,
//! aggregation and reporting.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
