//! Ranked candidate: a paper plus its derived growth metrics.

use chrono::NaiveDate;

use super::Paper;

/// A paper that passed the age and citation filters.
///
/// Built only by the ranker; fields are read through accessors so a
/// candidate cannot change after it is scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    paper: Paper,
    published: NaiveDate,
    months_ago: f64,
    velocity: f64,
    score: f64,
}

impl Candidate {
    /// Derive the metrics for `paper`.
    ///
    /// `months_ago` must be positive. The stored age and velocity are rounded
    /// for display (1 and 2 decimals); the score keeps full precision.
    pub(crate) fn new(paper: Paper, published: NaiveDate, months_ago: f64) -> Self {
        let velocity = citation_velocity(paper.citations(), months_ago);
        let score = growth_score(velocity, paper.influential_citations());
        Self {
            paper,
            published,
            months_ago: round_to(months_ago, 1),
            velocity: round_to(velocity, 2),
            score,
        }
    }

    /// The underlying paper record.
    #[must_use]
    pub const fn paper(&self) -> &Paper {
        &self.paper
    }

    /// Parsed publication date.
    #[must_use]
    pub const fn published(&self) -> NaiveDate {
        self.published
    }

    /// Age at evaluation time in 30-day months, rounded to 1 decimal.
    #[must_use]
    pub const fn months_ago(&self) -> f64 {
        self.months_ago
    }

    /// Citations per month, rounded to 2 decimals.
    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Ranking score (unrounded).
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Total citations.
    #[must_use]
    pub fn citations(&self) -> i32 {
        self.paper.citations()
    }

    /// Influential citations.
    #[must_use]
    pub fn influential_citations(&self) -> i32 {
        self.paper.influential_citations()
    }
}

/// Citations per month since publication.
#[must_use]
pub fn citation_velocity(citations: i32, months_ago: f64) -> f64 {
    citations as f64 / months_ago
}

/// Velocity plus a bonus of two points per influential citation.
#[must_use]
pub fn growth_score(velocity: f64, influential_citations: i32) -> f64 {
    2.0f64.mul_add(influential_citations as f64, velocity)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
