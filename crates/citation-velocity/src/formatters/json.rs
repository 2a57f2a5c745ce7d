//! JSON report formatting.

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::ReportResult;
use crate::models::Candidate;

/// Create a compact candidate representation for JSON output.
#[must_use]
pub fn compact_candidate(candidate: &Candidate, rank: usize) -> Value {
    let paper = candidate.paper();
    let mut obj = json!({
        "rank": rank,
        "title": paper.title_or_default(),
        "published": candidate.published().format("%Y-%m-%d").to_string(),
        "monthsAgo": candidate.months_ago(),
        "citations": candidate.citations(),
        "influentialCitations": candidate.influential_citations(),
        "velocity": candidate.velocity(),
        "score": candidate.score(),
    });

    // Add optional fields only if present
    if let Some(id) = &paper.paper_id {
        obj["id"] = json!(id);
    }

    if let Some(url) = &paper.url {
        obj["url"] = json!(url);
    }

    if !paper.authors.is_empty() {
        obj["authors"] =
            json!(paper.authors.iter().filter_map(|a| a.name.as_ref()).collect::<Vec<_>>());
    }

    if let Some(abs) = &paper.r#abstract {
        obj["abstract"] = json!(abs);
    }

    obj
}

/// Format the weekly report as pretty-printed JSON.
pub fn format_report_json(
    candidates: &[Candidate],
    config: &Config,
    date: NaiveDate,
) -> ReportResult<String> {
    let papers: Vec<Value> =
        candidates.iter().enumerate().map(|(i, c)| compact_candidate(c, i + 1)).collect();

    let report = json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "keyword": config.keyword,
        "sort": config.sort,
        "minMonths": config.ranking.min_months,
        "maxMonths": config.ranking.max_months,
        "minCitations": config.ranking.min_citations,
        "count": papers.len(),
        "papers": papers,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}
