//! Configuration for the citation velocity digest.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout for the single search call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Papers requested from the search endpoint (one page, no pagination).
    pub const SEARCH_LIMIT: u32 = 100;

    /// How many years back the search year filter reaches.
    pub const YEAR_SPAN: i32 = 2;
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields needed to rank and report a paper.
    pub const RANKING: &[&str] = &[
        "title",
        "publicationDate",
        "citationCount",
        "influentialCitationCount",
        "abstract",
        "url",
        "authors",
    ];
}

/// Default values for the ranking thresholds.
pub mod defaults {
    /// Keyword used when `KEYWORDS` is not set.
    pub const KEYWORD: &str = "Large Language Models";

    /// Youngest eligible paper, in months.
    pub const MIN_MONTHS: f64 = 6.0;

    /// Oldest eligible paper, in months.
    pub const MAX_MONTHS: f64 = 12.0;

    /// Minimum total citations.
    pub const MIN_CITATIONS: i32 = 5;

    /// Number of papers kept in the report.
    pub const TOP_N: usize = 10;

    /// Report file, relative to the working directory.
    pub const OUTPUT_PATH: &str = "report.md";
}

/// Order in which the search endpoint returns candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Server-side relevance ranking (no `sort` parameter).
    #[default]
    Relevance,
    /// Most cited first (`sort=citationCount:desc`).
    Citations,
}

impl SortOrder {
    /// Value for the `sort` query parameter, if any.
    #[must_use]
    pub const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Relevance => None,
            Self::Citations => Some("citationCount:desc"),
        }
    }
}

/// Output format of the written report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Thresholds that decide which papers are eligible and how many are kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    /// Inclusive lower bound of the age window, in months. Must be positive.
    pub min_months: f64,

    /// Inclusive upper bound of the age window, in months.
    pub max_months: f64,

    /// Minimum total citation count.
    pub min_citations: i32,

    /// Maximum number of candidates returned.
    pub top_n: usize,
}

impl RankingConfig {
    /// Check the window bounds.
    ///
    /// Both bounds must be finite. A non-positive lower bound would let
    /// `months_ago` reach zero and the velocity division blow up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_months.is_finite() || !self.max_months.is_finite() {
            return Err(ConfigError::NonFiniteWindow {
                min_months: self.min_months,
                max_months: self.max_months,
            });
        }
        if self.min_months <= 0.0 {
            return Err(ConfigError::NonPositiveMinMonths(self.min_months));
        }
        if self.min_months > self.max_months {
            return Err(ConfigError::InvertedWindow {
                min_months: self.min_months,
                max_months: self.max_months,
            });
        }
        if self.min_citations < 0 {
            return Err(ConfigError::NegativeMinCitations(self.min_citations));
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_months: defaults::MIN_MONTHS,
            max_months: defaults::MAX_MONTHS,
            min_citations: defaults::MIN_CITATIONS,
            top_n: defaults::TOP_N,
        }
    }
}

/// Digest configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search keyword.
    pub keyword: String,

    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Papers requested per search.
    pub search_limit: u32,

    /// Server-side sort order.
    pub sort: SortOrder,

    /// Eligibility thresholds.
    pub ranking: RankingConfig,

    /// Where the report is written.
    pub output_path: PathBuf,

    /// Report format.
    pub format: ReportFormat,
}

impl Config {
    /// Create a configuration for `keyword` with default thresholds.
    #[must_use]
    pub fn new(keyword: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            keyword: keyword.into(),
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            search_limit: api::SEARCH_LIMIT,
            sort: SortOrder::default(),
            ranking: RankingConfig::default(),
            output_path: PathBuf::from(defaults::OUTPUT_PATH),
            format: ReportFormat::default(),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            ..Self::new(defaults::KEYWORD, None)
        }
    }

    /// Create a configuration from optional user inputs.
    ///
    /// Blank values count as unset: a missing keyword falls back to
    /// [`defaults::KEYWORD`] and a blank API key is dropped.
    #[must_use]
    pub fn from_inputs(keyword: Option<String>, api_key: Option<String>) -> Self {
        let keyword = non_blank(keyword).unwrap_or_else(|| defaults::KEYWORD.to_string());
        Self::new(keyword, non_blank(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword.trim().is_empty() {
            return Err(ConfigError::EmptyKeyword);
        }
        self.ranking.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::KEYWORD, None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
