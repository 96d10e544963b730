//! Data ingestion and report persistence layer.

pub mod fixtures;
pub mod news;
pub mod normalize;
pub mod store;
