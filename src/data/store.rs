//! Report persistence: one pretty-printed JSON document per run.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};
use tracing::{info, warn};

use crate::analysis::AnalysisReport;

/// Writes reports into a directory, optionally with a CSV article table.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
    write_csv: bool,
}

impl ReportStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_csv: false,
        }
    }

    pub fn with_csv(mut self, write_csv: bool) -> Self {
        self.write_csv = write_csv;
        self
    }

    /// `sentiment_analysis_{TICKER}_{YYYYMMDD_HHMMSS}.json`
    pub fn file_name(report: &AnalysisReport) -> String {
        format!(
            "sentiment_analysis_{}_{}.json",
            report.ticker,
            report.analysis_date.format("%Y%m%d_%H%M%S")
        )
    }

    /// Persist `report`, returning the JSON path. A numeric suffix keeps runs
    /// within the same second apart. With CSV enabled, either both files are
    /// written or neither is left behind.
    pub async fn persist(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let body = serde_json::to_vec_pretty(report)?;
        let table = if self.write_csv {
            Some(articles_csv(report)?)
        } else {
            None
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create {}", self.dir.display()))?;
        let (path, mut file) = self.claim(&Self::file_name(report)).await?;
        let written = match file.write_all(&body).await {
            Ok(()) => file.flush().await,
            Err(err) => Err(err),
        };
        drop(file);
        if let Err(err) = written {
            discard(&path).await;
            return Err(err).with_context(|| format!("write {}", path.display()));
        }

        if let Some(table) = table {
            let csv_path = path.with_extension("csv");
            if let Err(err) = tokio::fs::write(&csv_path, table).await {
                discard(&path).await;
                return Err(err).with_context(|| format!("create {}", csv_path.display()));
            }
            info!(path = %csv_path.display(), "saved article table");
        }
        info!(path = %path.display(), articles = report.articles.len(), "saved analysis report");
        Ok(path)
    }

    /// Create a fresh JSON file, appending `_N` until the name is unclaimed.
    async fn claim(&self, file_name: &str) -> Result<(PathBuf, File)> {
        let stem = file_name.trim_end_matches(".json");
        for n in 0u32.. {
            let path = match n {
                0 => self.dir.join(file_name),
                n => self.dir.join(format!("{stem}_{n}.json")),
            };
            match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => {
                    return Err(err).with_context(|| format!("create {}", path.display()))
                }
            }
        }
        bail!("no free report name for {file_name}")
    }
}

async fn discard(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        warn!(path = %path.display(), %err, "could not remove partial report");
    }
}

fn articles_csv(report: &AnalysisReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "title",
        "description",
        "source",
        "url",
        "publishedAt",
        "sentiment",
        "confidence",
    ])?;
    for article in &report.articles {
        let record = &article.record;
        let confidence = article.confidence.to_string();
        writer.write_record([
            record.title.as_str(),
            record.description.as_str(),
            record.source.as_str(),
            record.url.as_str(),
            record.published_at.as_str(),
            article.sentiment.as_str(),
            confidence.as_str(),
        ])?;
    }
    writer.into_inner().map_err(|err| err.into_error().into())
}
