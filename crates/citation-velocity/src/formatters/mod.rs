//! Output formatters for Markdown and JSON.

mod json;
mod markdown;

pub use json::*;
pub use markdown::*;

use chrono::NaiveDate;

use crate::config::{Config, ReportFormat};
use crate::error::ReportResult;
use crate::models::Candidate;

/// Render the report in the configured format.
pub fn render_report(
    candidates: &[Candidate],
    config: &Config,
    date: NaiveDate,
) -> ReportResult<String> {
    match config.format {
        ReportFormat::Markdown => Ok(format_report_markdown(candidates, config, date)),
        ReportFormat::Json => format_report_json(candidates, config, date),
    }
}
