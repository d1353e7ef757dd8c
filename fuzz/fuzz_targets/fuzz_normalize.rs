#![no_main]

//! Normalization must be total and idempotent for arbitrary byte soup that
//! happens to be valid UTF-8.

use labelmatch::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: String| {
    let once = normalize(&raw);
    assert_eq!(normalize(&once), once);
    assert!(!once.contains(['.', '_', '-']));
});
