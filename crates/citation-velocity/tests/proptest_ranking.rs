//! Property-based tests for paper parsing and ranking.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use citation_velocity::config::RankingConfig;
use citation_velocity::models::Paper;
use citation_velocity::ranking::{evaluate, rank_papers};

/// Midnight, so elapsed whole days equal the calendar difference exactly.
fn eval_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

/// Publication date: missing, garbled, or a given number of days old.
#[derive(Debug, Clone)]
enum DateSpec {
    Missing,
    Garbled(String),
    DaysOld(i64),
}

fn arb_date() -> impl Strategy<Value = DateSpec> {
    prop_oneof![
        1 => Just(DateSpec::Missing),
        1 => "[0-9]{4}|[a-z ]{0,12}|[0-9]{2}/[0-9]{2}/[0-9]{4}".prop_map(DateSpec::Garbled),
        8 => (-60i64..600).prop_map(DateSpec::DaysOld),
    ]
}

fn arb_paper() -> impl Strategy<Value = (Paper, DateSpec)> {
    (
        "[A-Za-z0-9 ]{1,60}",                // title
        arb_date(),                          // publication date
        proptest::option::of(0i32..2_000),   // citation_count
        proptest::option::of(0i32..200),     // influential_citation_count
    )
        .prop_map(|(title, date, citation_count, influential_citation_count)| {
            let publication_date = match &date {
                DateSpec::Missing => None,
                DateSpec::Garbled(raw) => Some(raw.clone()),
                DateSpec::DaysOld(days) => Some(
                    (eval_time().date() - Duration::days(*days)).format("%Y-%m-%d").to_string(),
                ),
            };
            let paper = Paper {
                title: Some(title),
                publication_date,
                citation_count,
                influential_citation_count,
                ..Default::default()
            };
            (paper, date)
        })
}

fn arb_config() -> impl Strategy<Value = RankingConfig> {
    (1u32..12, 0u32..8, 0i32..30, 1usize..15).prop_map(|(min, span, min_citations, top_n)| {
        RankingConfig {
            min_months: f64::from(min),
            max_months: f64::from(min + span),
            min_citations,
            top_n,
        }
    })
}

proptest! {
    /// A paper is a candidate iff its date parses, its age is inside the
    /// window and it has enough citations.
    #[test]
    fn inclusion_matches_filters((paper, date) in arb_paper(), config in arb_config()) {
        let expected = match date {
            DateSpec::DaysOld(days) => {
                let months = days as f64 / 30.0;
                months >= config.min_months
                    && months <= config.max_months
                    && paper.citations() >= config.min_citations
            }
            DateSpec::Missing | DateSpec::Garbled(_) => false,
        };

        prop_assert_eq!(evaluate(&paper, eval_time(), &config).is_ok(), expected);
    }

    /// score = citations / months + 2 * influential, exactly.
    #[test]
    fn score_formula_is_exact(
        days in 30i64..600,
        citations in 0i32..5_000,
        influential in 0i32..500,
    ) {
        let config = RankingConfig {
            min_months: 1.0,
            max_months: 20.0,
            min_citations: 0,
            top_n: 10,
        };
        let paper = Paper {
            publication_date: Some(
                (eval_time().date() - Duration::days(days)).format("%Y-%m-%d").to_string(),
            ),
            citation_count: Some(citations),
            influential_citation_count: Some(influential),
            ..Default::default()
        };

        let candidate = evaluate(&paper, eval_time(), &config).unwrap();
        let months = days as f64 / 30.0;
        let expected = citations as f64 / months + 2.0 * influential as f64;

        prop_assert!((candidate.score() - expected).abs() <= f64::EPSILON * expected.max(1.0));
        prop_assert!((candidate.velocity() - citations as f64 / months).abs() <= 0.005 + 1e-9);
        prop_assert!((candidate.months_ago() - months).abs() <= 0.05 + 1e-9);
    }

    /// Output is bounded by top_n, sorted non-increasing, and keeps as many
    /// candidates as are eligible up to that bound.
    #[test]
    fn ranking_is_bounded_and_sorted(
        papers in proptest::collection::vec(arb_paper(), 0..60),
        config in arb_config(),
    ) {
        let papers: Vec<Paper> = papers.into_iter().map(|(paper, _)| paper).collect();
        let eligible = papers
            .iter()
            .filter(|p| evaluate(p, eval_time(), &config).is_ok())
            .count();

        let ranking = rank_papers(&papers, eval_time(), &config);

        prop_assert_eq!(ranking.summary.eligible, eligible);
        prop_assert_eq!(ranking.candidates.len(), eligible.min(config.top_n));
        for pair in ranking.candidates.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }
    }

    /// Paper deserialization never panics on arbitrary JSON objects.
    #[test]
    fn paper_from_arbitrary_json_object_never_panics(
        title in proptest::option::of(".*"),
        date in proptest::option::of(".*"),
        citations in proptest::option::of(any::<i32>()),
    ) {
        let json = serde_json::json!({
            "title": title,
            "publicationDate": date,
            "citationCount": citations,
        });

        if let Ok(paper) = serde_json::from_value::<Paper>(json) {
            let _ = rank_papers(&[paper], eval_time(), &RankingConfig::default());
        }
    }
}

#[test]
fn paper_handles_null_fields() {
    let json = serde_json::json!({
        "paperId": "abc123",
        "title": null,
        "publicationDate": null,
        "citationCount": null,
        "influentialCitationCount": null,
    });
    let paper: Paper = serde_json::from_value(json).unwrap();

    assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
    assert!(paper.title.is_none());
    assert!(evaluate(&paper, eval_time(), &RankingConfig::default()).is_err());
}
