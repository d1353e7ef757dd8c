#![no_main]

//! Drives the full matching pipeline with arbitrary queries and candidate
//! lists. The matcher is total: any input must produce a result without
//! panicking, every score must stay in [0, 1], and a reported winner must
//! come from the candidate list.

use labelmatch::{ACCEPT_THRESHOLD, Matcher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Vec<String>)| {
    let (query, candidates) = input;
    let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();

    let matcher = Matcher::default();

    if let Some(hit) = matcher.best_match(&query, refs.iter().copied()) {
        assert!(refs.contains(&hit.candidate));
        assert!(hit.score > ACCEPT_THRESHOLD);
        assert!(hit.score <= 1.0);
    }

    for hit in matcher.rank(&query, refs.iter().copied()) {
        assert!((0.0..=1.0).contains(&hit.score));
    }
});
