//! Citation Velocity Digest
//!
//! Finds papers on Semantic Scholar that are gaining citations unusually fast
//! for their age and writes a short weekly report about them.
//!
//! # Pipeline
//!
//! - **Fetch**: one search request for the keyword over the last two years
//! - **Rank**: keep papers 6-12 months old (configurable) with enough
//!   citations, score by citations per month plus two points per
//!   influential citation, keep the top 10
//! - **Report**: Markdown (or JSON) written to `report.md`
//!
//! # Example
//!
//! ```no_run
//! use citation_velocity::{config::Config, pipeline, SemanticScholarClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_inputs(std::env::var("KEYWORDS").ok(), None);
//!     let client = SemanticScholarClient::new(&config)?;
//!     let now = chrono::Local::now().naive_local();
//!
//!     let digest = pipeline::run(&client, &config, now).await?;
//!     println!("{} papers", digest.ranking.candidates.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod ranking;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, ConfigError, ReportError};
pub use fetcher::FetchOutcome;
