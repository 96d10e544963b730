//! Command-line interface wiring for headline-sentiment.

use std::{process::ExitCode, str::FromStr};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Settings;

pub mod analyze;
pub mod serve;

/// Top-level CLI definition. A bare ticker runs one analysis.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Stock news headline sentiment analyzer",
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    analyze: analyze::Args,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<ExitCode> {
        match self.command {
            Some(Commands::Serve(args)) => {
                serve::run(args, settings).await?;
                Ok(ExitCode::SUCCESS)
            }
            None => analyze::run(self.analyze, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON analysis API.
    Serve(serve::Args),
}

/// Sentiment backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Built-in financial lexicon.
    Lexicon,
    /// DistilBERT SST-2 through ONNX Runtime (requires the `onx` feature).
    Onnx,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}
