//! Data models for Semantic Scholar papers and ranked candidates.
//!
//! API models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod candidate;
mod paper;

pub use candidate::{Candidate, citation_velocity, growth_score};
pub use paper::{AuthorRef, PUBLICATION_DATE_FORMAT, Paper, SearchResult};
