//! CLI entry-point for the HTTP analysis API.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, cli::ModelKind, config::Settings};

/// Bind address and backend for `serve`.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Interface to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Sentiment backend for every request; defaults to SENTIMENT_MODEL.
    #[arg(long, value_enum)]
    pub model: Option<ModelKind>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let model = args.model.unwrap_or(settings.model);
    api::serve(settings, model, args.host, args.port).await
}
