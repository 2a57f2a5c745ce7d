//! Candidate retrieval: one search request, no retries.

use chrono::{Datelike, NaiveDate};

use crate::client::{SearchQuery, SemanticScholarClient};
use crate::config::{Config, api, fields};
use crate::error::ClientError;
use crate::models::Paper;

/// Result of the single search call.
///
/// Failures are values, not errors: the caller decides to carry on with an
/// empty list.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The API answered; `data` may be empty.
    Fetched(Vec<Paper>),
    /// The request failed.
    Failed {
        /// Human-readable failure reason
        reason: String,
        /// Underlying client error
        error: ClientError,
    },
}

impl FetchOutcome {
    /// Returns true if the request failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Papers on success, an empty list on failure.
    #[must_use]
    pub fn into_papers(self) -> Vec<Paper> {
        match self {
            Self::Fetched(papers) => papers,
            Self::Failed { .. } => Vec::new(),
        }
    }
}

impl From<ClientError> for FetchOutcome {
    fn from(error: ClientError) -> Self {
        Self::Failed { reason: error.to_string(), error }
    }
}

/// Year filter covering the last [`api::YEAR_SPAN`] years up to `today`.
#[must_use]
pub fn year_range(today: NaiveDate) -> String {
    let year = today.year();
    format!("{}-{}", year - api::YEAR_SPAN, year)
}

/// Fetch one page of papers for the configured keyword.
pub async fn fetch_papers(
    client: &SemanticScholarClient,
    config: &Config,
    today: NaiveDate,
) -> FetchOutcome {
    let year = year_range(today);
    let search = SearchQuery {
        query: &config.keyword,
        year: &year,
        limit: config.search_limit,
        sort: config.sort,
        fields: fields::RANKING,
    };

    tracing::info!(keyword = %config.keyword, year = %year, sort = ?config.sort, "Searching papers");

    match client.search_papers(&search).await {
        Ok(result) => {
            tracing::info!(fetched = result.data.len(), total = result.total, "Search complete");
            FetchOutcome::Fetched(result.data)
        }
        Err(error) => {
            tracing::warn!(error = %error, "Search failed, continuing with no papers");
            FetchOutcome::from(error)
        }
    }
}
