//! Entry point wiring CLI dispatch to the analysis pipeline.

use std::process::ExitCode;

use anyhow::Result;
use headline_sentiment::{cli::Cli, config::Settings, logging};
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing()?;
    let settings = Settings::load()?;

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
