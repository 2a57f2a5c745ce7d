//! Fetch → rank → render → write.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::client::SemanticScholarClient;
use crate::config::Config;
use crate::error::{ReportError, ReportResult};
use crate::fetcher::fetch_papers;
use crate::formatters::render_report;
use crate::ranking::{Ranking, rank_papers};

/// Everything produced by one run.
#[derive(Debug)]
pub struct Digest {
    /// Whether the search request failed (the report is then the fallback).
    pub fetch_failed: bool,
    /// Ranked candidates and filter statistics.
    pub ranking: Ranking,
    /// Rendered report text.
    pub report: String,
}

/// Fetch, rank and render without touching the filesystem.
///
/// A failed search is not an error here: it yields an empty ranking and the
/// fallback report.
pub async fn build_digest(
    client: &SemanticScholarClient,
    config: &Config,
    now: NaiveDateTime,
) -> ReportResult<Digest> {
    let outcome = fetch_papers(client, config, now.date()).await;
    let fetch_failed = outcome.is_failed();
    let papers = outcome.into_papers();

    let ranking = rank_papers(&papers, now, &config.ranking);
    tracing::info!(
        examined = ranking.summary.examined,
        eligible = ranking.summary.eligible,
        kept = ranking.summary.kept,
        "Ranked papers"
    );

    let report = render_report(&ranking.candidates, config, now.date())?;

    Ok(Digest { fetch_failed, ranking, report })
}

/// Write the report as UTF-8, replacing any previous file.
pub fn write_report(path: &Path, contents: &str) -> ReportResult<()> {
    std::fs::write(path, contents)
        .map_err(|source| ReportError::Write { path: path.to_path_buf(), source })
}

/// Run the whole digest and write the report to `config.output_path`.
pub async fn run(
    client: &SemanticScholarClient,
    config: &Config,
    now: NaiveDateTime,
) -> ReportResult<Digest> {
    let digest = build_digest(client, config, now).await?;
    write_report(&config.output_path, &digest.report)?;

    tracing::info!(
        path = %config.output_path.display(),
        papers = digest.ranking.candidates.len(),
        "Report written"
    );

    Ok(digest)
}
