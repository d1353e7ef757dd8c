#![forbid(unsafe_code)]

//! Fuzzy matching of messy filenames against known label sets.
//!
//! Given a noisy query (typically the name of an uploaded file, complete
//! with numeric prefix, separator junk, and a spreadsheet extension) and a
//! small ordered list of clean candidate labels, pick the single best match
//! or report that nothing is close enough.
//!
//! Scoring is layered; the maximum layer wins:
//!
//! - exact match of the normalized query against the lower-cased candidate
//! - substring containment, biased toward 1.0 as lengths converge
//! - word-level token overlap
//! - Levenshtein similarity
//! - Jaro-Winkler similarity
//!
//! The library is a pure function of its inputs: no I/O, no shared state,
//! no panics on any string content. Callers own the candidate list; results
//! borrow from it.
//!
//! # Example
//!
//! ```
//! use labelmatch::find_best_match;
//!
//! let labels = ["campinas", "R293", "R075"];
//!
//! // Numeric prefixes, separators, and extensions are query noise.
//! assert_eq!(find_best_match("31.r075", labels), Some("R075"));
//! assert_eq!(find_best_match("30.r_293", labels), Some("R293"));
//! assert_eq!(find_best_match("r075.xlsx", labels), Some("R075"));
//!
//! // Nothing close enough: no match rather than a bad match.
//! assert_eq!(find_best_match("zzz999", labels), None);
//! ```
//!
//! For scores, ranking, or custom thresholds and extension lists, use
//! [`Matcher`]:
//!
//! ```
//! use labelmatch::{Matcher, MatcherConfig};
//!
//! let matcher = Matcher::new(MatcherConfig::default().with_threshold(0.5));
//! let hit = matcher.best_match("31.r075", ["campinas", "R293", "R075"]).unwrap();
//! assert_eq!(hit.candidate, "R075");
//! assert_eq!(hit.score, 1.0);
//! ```

pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod token;

pub use matcher::{
    ACCEPT_THRESHOLD, MatchKind, Matcher, MatcherConfig, ScoredCandidate, find_best_match,
};
pub use normalize::normalize;
