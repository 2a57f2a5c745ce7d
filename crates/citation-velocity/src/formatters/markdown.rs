//! Markdown report formatting.

use chrono::NaiveDate;

use crate::config::{Config, SortOrder};
use crate::models::{Candidate, Paper};

/// Placeholder shown when a paper has no abstract.
pub const NO_ABSTRACT: &str = "No abstract available.";

/// Format the weekly report as Markdown.
///
/// An empty list produces the fallback document instead of an empty table.
#[must_use]
pub fn format_report_markdown(candidates: &[Candidate], config: &Config, date: NaiveDate) -> String {
    if candidates.is_empty() {
        return format_empty_report_markdown(config, date);
    }

    let mut output = format!("# 🚀 High-Potential Papers ({})\n", date.format("%Y-%m-%d"));
    output.push_str(&format!(
        "**Keyword**: `{}` | **Window**: published {} | **Min citations**: {} | {}\n\n",
        config.keyword,
        window_label(config),
        config.ranking.min_citations,
        ranking_basis(config.sort),
    ));

    for (i, candidate) in candidates.iter().enumerate() {
        output.push_str(&format_candidate_markdown(candidate, i + 1));
        output.push_str("---\n");
    }

    output
}

/// Format a single ranked paper as Markdown.
#[must_use]
pub fn format_candidate_markdown(candidate: &Candidate, rank: usize) -> String {
    let paper = candidate.paper();
    let mut output = String::new();

    // Title
    match paper_link(paper) {
        Some(link) => {
            output.push_str(&format!("### {}. [{}]({})\n", rank, paper.title_or_default(), link));
        }
        None => output.push_str(&format!("### {}. {}\n", rank, paper.title_or_default())),
    }

    if !paper.authors.is_empty() {
        output.push_str(&format!("- **Authors**: {}\n", paper.author_names()));
    }

    // Metrics
    output.push_str(&format!(
        "- **🔥 Citation velocity**: `{:.2} citations/month`\n",
        candidate.velocity()
    ));
    output.push_str(&format!(
        "- **📈 Citations**: {} | **🌟 Influential**: {}\n",
        candidate.citations(),
        candidate.influential_citations()
    ));
    output.push_str(&format!(
        "- **📅 Published**: {} (about {:.1} months ago)\n",
        candidate.published().format("%Y-%m-%d"),
        candidate.months_ago()
    ));

    // Abstract, collapsed
    let abstract_text = paper
        .r#abstract
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(NO_ABSTRACT);
    output.push_str("<details><summary>📖 Abstract</summary>\n\n");
    output.push_str(abstract_text);
    output.push_str("\n\n</details>\n\n");

    output
}

fn format_empty_report_markdown(config: &Config, date: NaiveDate) -> String {
    format!(
        "# 🚀 High-Potential Papers ({date})\n\n\
         No papers matched this run's criteria.\n\n\
         - **Keyword**: `{keyword}`\n\
         - **Window**: published {window}\n\
         - **Min citations**: {min_citations}\n\n\
         None of the papers found for this keyword were inside the age window \
         with enough citations to rank. Consider widening the age window or \
         lowering the citation threshold.\n",
        date = date.format("%Y-%m-%d"),
        keyword = config.keyword,
        window = window_label(config),
        min_citations = config.ranking.min_citations,
    )
}

fn window_label(config: &Config) -> String {
    format!("{}-{} months ago", config.ranking.min_months, config.ranking.max_months)
}

const fn ranking_basis(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Relevance => "top relevance matches ranked by citation velocity",
        SortOrder::Citations => "most-cited matches ranked by citation velocity",
    }
}

fn paper_link(paper: &Paper) -> Option<String> {
    paper.url.clone().filter(|u| !u.is_empty()).or_else(|| {
        paper
            .paper_id
            .as_ref()
            .map(|id| format!("https://www.semanticscholar.org/paper/{id}"))
    })
}
