//! Error types for the citation velocity digest.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by Semantic Scholar API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Classify a transport error, pulling timeouts out into their own variant.
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
    }

    /// Returns true if the failure came from the network rather than the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }
}

/// Invalid digest configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Keyword is empty or whitespace.
    #[error("search keyword must not be empty")]
    EmptyKeyword,

    /// Age window bound is NaN or infinite.
    #[error("age window bounds must be finite, got {min_months}..={max_months} months")]
    NonFiniteWindow {
        /// Configured lower bound
        min_months: f64,
        /// Configured upper bound
        max_months: f64,
    },

    /// Age window floor must be strictly positive.
    #[error("minimum age must be positive, got {0} months")]
    NonPositiveMinMonths(f64),

    /// Age window floor above its ceiling.
    #[error("age window is inverted: {min_months} > {max_months} months")]
    InvertedWindow {
        /// Configured lower bound
        min_months: f64,
        /// Configured upper bound
        max_months: f64,
    },

    /// Citation threshold below zero.
    #[error("minimum citations must not be negative, got {0}")]
    NegativeMinCitations(i32),
}

/// Errors while rendering or writing the report.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
