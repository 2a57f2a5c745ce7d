#![no_main]

use libfuzzer_sys::fuzz_target;
use citation_velocity::models::Paper;

fuzz_target!(|data: &[u8]| {
    // Parsing and date handling must never panic
    if let Ok(paper) = serde_json::from_slice::<Paper>(data) {
        let _ = paper.parsed_publication_date();
        let _ = paper.author_names();
    }
});
