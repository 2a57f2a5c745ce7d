//! Paper records as returned by the Semantic Scholar search endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format of `publicationDate`.
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// A research paper from Semantic Scholar.
///
/// Only the fields requested by the digest are modelled; everything is
/// optional because the API omits or nulls fields freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Semantic Scholar paper ID (always returned, even when not requested).
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Citations the provider flags as building substantively on this paper.
    #[serde(default)]
    pub influential_citation_count: Option<i32>,

    /// Semantic Scholar landing page.
    #[serde(default)]
    pub url: Option<String>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i32 {
        self.citation_count.unwrap_or(0)
    }

    /// Get influential citation count or 0 if not available.
    #[must_use]
    pub fn influential_citations(&self) -> i32 {
        self.influential_citation_count.unwrap_or(0)
    }

    /// Parse the publication date.
    ///
    /// `None` when the field is absent; `Some(Err(_))` when it is present but
    /// not a `YYYY-MM-DD` calendar date (the API sometimes sends bare years).
    #[must_use]
    pub fn parsed_publication_date(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.publication_date
            .as_deref()
            .map(|raw| NaiveDate::parse_from_str(raw.trim(), PUBLICATION_DATE_FORMAT))
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Offset of the next page, if any. Never followed.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let paper: Paper = serde_json::from_str("{}").unwrap();
        assert!(paper.paper_id.is_none());
        assert_eq!(paper.title_or_default(), "Untitled");
        assert_eq!(paper.citations(), 0);
        assert_eq!(paper.influential_citations(), 0);
        assert!(paper.parsed_publication_date().is_none());
        assert!(paper.authors.is_empty());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Scaling Laws Revisited",
            "abstract": "We revisit scaling laws.",
            "publicationDate": "2025-02-14",
            "citationCount": 42,
            "influentialCitationCount": 7,
            "url": "https://www.semanticscholar.org/paper/abc123",
            "authors": [{"authorId": "1", "name": "Ada Lovelace"}, {"authorId": "2", "name": "Alan Turing"}]
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
        assert_eq!(paper.title_or_default(), "Scaling Laws Revisited");
        assert_eq!(paper.citations(), 42);
        assert_eq!(paper.influential_citations(), 7);
        assert_eq!(
            paper.parsed_publication_date().unwrap().unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
        assert_eq!(paper.author_names(), "Ada Lovelace, Alan Turing");
    }

    #[test]
    fn test_null_fields_are_none() {
        let json = r#"{"title": null, "abstract": null, "publicationDate": null, "citationCount": null}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert!(paper.r#abstract.is_none());
        assert!(paper.parsed_publication_date().is_none());
        assert_eq!(paper.citations(), 0);
    }

    #[test]
    fn test_unparseable_publication_date() {
        let paper = Paper { publication_date: Some("2024".to_string()), ..Default::default() };
        assert!(matches!(paper.parsed_publication_date(), Some(Err(_))));

        let paper = Paper { publication_date: Some("14/02/2025".to_string()), ..Default::default() };
        assert!(matches!(paper.parsed_publication_date(), Some(Err(_))));
    }

    #[test]
    fn test_search_result_without_data() {
        let result: SearchResult = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(result.data.is_empty());
    }
}
