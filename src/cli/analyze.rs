//! CLI entry-point for a single ticker analysis.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    analysis::{Pipeline, PipelineRun},
    cli::ModelKind,
    config::Settings,
    error::AnalysisError,
    nlp::SentimentLabel,
};

const BANNER_WIDTH: usize = 60;

/// Args for a ticker analysis.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Stock ticker symbol, e.g. AAPL (case-insensitive). A ticker spelled
    /// like a sub-command must be given in upper case, e.g. SERVE.
    #[arg(required = true)]
    pub ticker: Option<String>,
    /// Override the news look-back window in days.
    #[arg(long)]
    pub days_back: Option<u32>,
    /// Sentiment backend; defaults to SENTIMENT_MODEL or `lexicon`.
    #[arg(long, value_enum)]
    pub model: Option<ModelKind>,
    /// Also write the article table as CSV next to the JSON report.
    #[arg(long)]
    pub csv: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<ExitCode> {
    let ticker = args.ticker.unwrap_or_default();
    let model = args.model.unwrap_or(settings.model);
    let days_back = args.days_back.unwrap_or(settings.news_days_back);
    let pipeline = Pipeline::from_settings(&settings, model, args.csv)?.with_days_back(days_back);

    banner("STOCK NEWS SENTIMENT ANALYZER");
    println!("Analyzing sentiment for: {}\n", ticker.trim().to_ascii_uppercase());

    match pipeline.run(&ticker).await {
        Ok(run) => {
            print_run(&run);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::EmptyResult { ticker }) => {
                info!(%ticker, "no headlines available");
                println!("No news articles found for {ticker}");
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}

fn print_run(run: &PipelineRun) {
    if run.fallback {
        println!("Using fixture news data (set NEWS_API_KEY for live headlines)\n");
    }
    println!("Found {} articles\n", run.report.articles.len());
    for (i, article) in run.report.articles.iter().enumerate() {
        println!(
            "{}. {} {} ({:.2})",
            i + 1,
            marker(&article.sentiment),
            article.sentiment,
            article.confidence
        );
        println!("   {}", article.record.title);
        println!("   Source: {}\n", article.record.source);
    }
    println!("\n{}", run.summary);
    println!("\nResults saved to: {}\n", run.output.display());
    banner("ANALYSIS COMPLETE");
}

fn marker(label: &SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "🟢",
        SentimentLabel::Negative => "🔴",
        _ => "🟡",
    }
}

fn banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{rule}\n{title}\n{rule}\n");
}
