#![no_main]

use chrono::NaiveDate;
use citation_velocity::config::RankingConfig;
use citation_velocity::models::SearchResult;
use citation_velocity::ranking::rank_papers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(result) = serde_json::from_slice::<SearchResult>(data) else {
        return;
    };
    let Some(now) = NaiveDate::from_ymd_opt(2025, 6, 1).and_then(|d| d.and_hms_opt(12, 0, 0)) else {
        return;
    };

    let config = RankingConfig::default();
    let ranking = rank_papers(&result.data, now, &config);

    assert!(ranking.candidates.len() <= config.top_n);
    assert!(ranking.candidates.windows(2).all(|w| w[0].score() >= w[1].score()));
});
