//! Semantic Scholar API client.
//!
//! A thin wrapper over `reqwest` for the one endpoint the digest needs.
//! Every call is bounded by the configured timeout and is never retried.

use std::time::Duration;

use reqwest::Client;

use crate::config::{Config, SortOrder};
use crate::error::{ClientError, ClientResult};
use crate::models::SearchResult;

/// Parameters of a single paper search.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery<'a> {
    /// Free-text query.
    pub query: &'a str,
    /// Publication year filter, e.g. `"2023-2025"`.
    pub year: &'a str,
    /// Page size.
    pub limit: u32,
    /// Server-side ordering.
    pub sort: SortOrder,
    /// Fields to return per paper.
    pub fields: &'a [&'a str],
}

impl SearchQuery<'_> {
    /// Query string pairs in request order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("query".to_string(), self.query.to_string()),
            ("year".to_string(), self.year.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        if let Some(sort) = self.sort.query_value() {
            params.push(("sort".to_string(), sort.to_string()));
        }

        params.push(("fields".to_string(), self.fields.join(",")));
        params
    }
}

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Request timeout, kept for error reporting.
    request_timeout: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers (one page).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or an
    /// undecodable body.
    pub async fn search_papers(&self, search: &SearchQuery<'_>) -> ClientResult<SearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);
        self.get(&url, &search.to_params()).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, ?params, "GET");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        let response = self.handle_response(response).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_without_sort() {
        let search = SearchQuery {
            query: "graph neural networks",
            year: "2023-2025",
            limit: 100,
            sort: SortOrder::Relevance,
            fields: &["title", "url"],
        };

        let params = search.to_params();
        assert_eq!(
            params,
            vec![
                ("query".to_string(), "graph neural networks".to_string()),
                ("year".to_string(), "2023-2025".to_string()),
                ("limit".to_string(), "100".to_string()),
                ("fields".to_string(), "title,url".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_with_citation_sort() {
        let search = SearchQuery {
            query: "q",
            year: "2023-2025",
            limit: 100,
            sort: SortOrder::Citations,
            fields: &["title"],
        };

        let params = search.to_params();
        assert!(params.contains(&("sort".to_string(), "citationCount:desc".to_string())));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config::new("q", Some("super-secret-key".to_string()));
        let client = SemanticScholarClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("has_api_key: true"));
    }
}
