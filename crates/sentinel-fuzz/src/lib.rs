//! Fuzzing library for citation-velocity.
//!
//! This crate provides fuzzing targets for the search response models and
//! the ranking pass that consumes them.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_search_rank -- -max_total_time=60
//! ```

pub use citation_velocity::{models, ranking};
