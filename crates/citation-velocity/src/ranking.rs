//! Age-window filtering and citation-velocity ranking.
//!
//! A paper is eligible when its publication date parses, its age falls inside
//! the configured window (both bounds inclusive) and it has at least the
//! minimum number of citations. Eligible papers are scored by
//! `citations / months + 2 * influential` and the best `top_n` are kept.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::RankingConfig;
use crate::models::{Candidate, Paper};

/// Days per month used for ages.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Why a paper did not become a candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// No `publicationDate`.
    MissingDate,
    /// `publicationDate` is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Age outside the window.
    OutsideWindow {
        /// Age in months at evaluation time
        months_ago: f64,
    },
    /// Too few citations.
    BelowThreshold {
        /// Citation count of the paper
        citations: i32,
    },
}

/// Per-reason counts from one ranking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingSummary {
    /// Papers looked at.
    pub examined: usize,
    /// Skipped for a missing date.
    pub missing_date: usize,
    /// Skipped for an unparseable date.
    pub invalid_date: usize,
    /// Skipped for age.
    pub outside_window: usize,
    /// Skipped for citation count.
    pub below_threshold: usize,
    /// Passed every filter.
    pub eligible: usize,
    /// Kept after truncation.
    pub kept: usize,
}

impl RankingSummary {
    fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::MissingDate => self.missing_date += 1,
            Rejection::InvalidDate(_) => self.invalid_date += 1,
            Rejection::OutsideWindow { .. } => self.outside_window += 1,
            Rejection::BelowThreshold { .. } => self.below_threshold += 1,
        }
    }
}

/// Outcome of [`rank_papers`].
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Best candidates, highest score first.
    pub candidates: Vec<Candidate>,
    /// Filter statistics.
    pub summary: RankingSummary,
}

/// Age of a paper in 30-day months.
///
/// Whole elapsed days are counted from midnight of the publication date, so a
/// partial day does not count.
#[must_use]
pub fn months_between(evaluated_at: NaiveDateTime, published: NaiveDate) -> f64 {
    let days = (evaluated_at - published.and_time(NaiveTime::MIN)).num_days();
    days as f64 / DAYS_PER_MONTH
}

/// Apply the eligibility filters to a single paper.
pub fn evaluate(
    paper: &Paper,
    evaluated_at: NaiveDateTime,
    config: &RankingConfig,
) -> Result<Candidate, Rejection> {
    let published = match paper.parsed_publication_date() {
        None => return Err(Rejection::MissingDate),
        Some(Err(_)) => {
            return Err(Rejection::InvalidDate(
                paper.publication_date.clone().unwrap_or_default(),
            ));
        }
        Some(Ok(date)) => date,
    };

    let months_ago = months_between(evaluated_at, published);
    if !(config.min_months..=config.max_months).contains(&months_ago) {
        return Err(Rejection::OutsideWindow { months_ago });
    }

    let citations = paper.citations();
    if citations < config.min_citations {
        return Err(Rejection::BelowThreshold { citations });
    }

    Ok(Candidate::new(paper.clone(), published, months_ago))
}

/// Filter, score and rank `papers`.
///
/// The sort is stable, so equal scores keep their input order.
#[must_use]
pub fn rank_papers(
    papers: &[Paper],
    evaluated_at: NaiveDateTime,
    config: &RankingConfig,
) -> Ranking {
    let mut summary = RankingSummary { examined: papers.len(), ..RankingSummary::default() };
    let mut candidates = Vec::new();

    for paper in papers {
        match evaluate(paper, evaluated_at, config) {
            Ok(candidate) => candidates.push(candidate),
            Err(rejection) => {
                tracing::trace!(
                    title = paper.title_or_default(),
                    reason = ?rejection,
                    "Skipping paper"
                );
                summary.record(&rejection);
            }
        }
    }

    summary.eligible = candidates.len();
    candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));
    candidates.truncate(config.top_n);
    summary.kept = candidates.len();

    tracing::debug!(?summary, "Ranking complete");

    Ranking { candidates, summary }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn eval_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    fn paper_aged(days: i64, citations: i32, influential: i32) -> Paper {
        let published = eval_time().date() - Duration::days(days);
        Paper {
            title: Some(format!("Paper {days}d")),
            publication_date: Some(published.format("%Y-%m-%d").to_string()),
            citation_count: Some(citations),
            influential_citation_count: Some(influential),
            ..Default::default()
        }
    }

    #[test]
    fn test_months_between_ignores_partial_days() {
        let published = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        // 30 days and 9.5 hours
        assert!((months_between(eval_time(), published) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_rejection_reasons() {
        let config = RankingConfig::default();

        let missing = Paper::default();
        assert_eq!(evaluate(&missing, eval_time(), &config), Err(Rejection::MissingDate));

        let bad = Paper { publication_date: Some("2024".into()), ..Default::default() };
        assert_eq!(
            evaluate(&bad, eval_time(), &config),
            Err(Rejection::InvalidDate("2024".into()))
        );

        let young = paper_aged(90, 500, 10);
        assert!(matches!(
            evaluate(&young, eval_time(), &config),
            Err(Rejection::OutsideWindow { .. })
        ));

        let uncited = paper_aged(240, 4, 0);
        assert_eq!(
            evaluate(&uncited, eval_time(), &config),
            Err(Rejection::BelowThreshold { citations: 4 })
        );
    }

    #[test]
    fn test_summary_counts() {
        let papers = vec![
            Paper::default(),
            Paper { publication_date: Some("not a date".into()), ..Default::default() },
            paper_aged(30, 100, 0),
            paper_aged(200, 1, 0),
            paper_aged(200, 10, 0),
        ];

        let ranking = rank_papers(&papers, eval_time(), &RankingConfig::default());
        assert_eq!(
            ranking.summary,
            RankingSummary {
                examined: 5,
                missing_date: 1,
                invalid_date: 1,
                outside_window: 1,
                below_threshold: 1,
                eligible: 1,
                kept: 1,
            }
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut first = paper_aged(240, 20, 0);
        first.title = Some("first".into());
        let mut second = paper_aged(240, 20, 0);
        second.title = Some("second".into());

        let ranking = rank_papers(&[first, second], eval_time(), &RankingConfig::default());
        let titles: Vec<_> =
            ranking.candidates.iter().map(|c| c.paper().title_or_default()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let papers: Vec<_> = (0..25).map(|i| paper_aged(240, 10 + i, 0)).collect();
        let config = RankingConfig { top_n: 10, ..RankingConfig::default() };

        let ranking = rank_papers(&papers, eval_time(), &config);
        assert_eq!(ranking.candidates.len(), 10);
        assert_eq!(ranking.summary.eligible, 25);
        assert_eq!(ranking.candidates[0].citations(), 34);
    }
}
