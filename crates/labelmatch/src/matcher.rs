#![forbid(unsafe_code)]

//! Layered scoring and winner selection.
//!
//! Each candidate is scored through up to five layers (exact match,
//! containment, token overlap, edit distance, Jaro-Winkler) and the maximum
//! wins. [`Matcher`] carries the configuration; [`find_best_match`] is the
//! zero-config entry point.
//!
//! # Invariants
//!
//! 1. Scoring is a pure function of `(query, candidate)`: no hidden state,
//!    deterministic for identical inputs.
//! 2. Scores lie in `[0, 1]`.
//! 3. The winner is the first candidate to reach the running maximum; a later
//!    candidate with an equal score never displaces it.
//! 4. A best score at or below the acceptance threshold yields no match.
//! 5. No input panics: empty, punctuation-only, and non-ASCII strings all
//!    score normally.

use core::fmt;

use tracing::{debug, trace};

use crate::normalize::{DEFAULT_EXTENSIONS, normalize_with};
use crate::similarity::{jaro_winkler, levenshtein_similarity};
use crate::token::overlap_score;

/// Default acceptance threshold. The best score must strictly exceed this
/// for the matcher to report a winner.
pub const ACCEPT_THRESHOLD: f64 = 0.3;

/// Containment floor: the lowest score a substring relationship can earn.
const CONTAINMENT_FLOOR: f64 = 0.8;
/// Span above the floor, scaled by the length ratio of the two strings.
const CONTAINMENT_SPAN: f64 = 0.2;

/// Which scoring layer produced a candidate's winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchKind {
    /// Normalized query equals the lower-cased candidate.
    Exact,
    /// One side is a substring of the other.
    Containment,
    /// Word-level token overlap.
    TokenOverlap,
    /// Levenshtein similarity.
    EditDistance,
    /// Jaro-Winkler similarity.
    JaroWinkler,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Containment => write!(f, "containment"),
            Self::TokenOverlap => write!(f, "token-overlap"),
            Self::EditDistance => write!(f, "edit-distance"),
            Self::JaroWinkler => write!(f, "jaro-winkler"),
        }
    }
}

/// A candidate with its score and the layer that produced it.
///
/// Borrows the candidate from the caller's list; the matcher never clones or
/// mutates candidate storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredCandidate<'a> {
    /// The candidate exactly as supplied by the caller.
    pub candidate: &'a str,
    /// Match confidence in `[0, 1]`.
    pub score: f64,
    /// The scoring layer the confidence came from.
    pub kind: MatchKind,
}

/// Matcher configuration: acceptance threshold and recognized extensions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatcherConfig {
    /// Strict lower bound a winning score must exceed.
    pub threshold: f64,
    /// Trailing extensions stripped from queries, lower-case, dot-free.
    pub extensions: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: ACCEPT_THRESHOLD,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl MatcherConfig {
    /// Replace the acceptance threshold. The bound stays strict: a best
    /// score equal to `threshold` is still rejected.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the recognized extension list. Entries are lower-cased and
    /// stripped of leading dots, so `".XLSX"` and `"xlsx"` are equivalent.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }
}

/// Reusable fuzzy matcher.
///
/// Construct once, query many times. `Matcher::default()` reproduces the
/// behavior of the free [`find_best_match`] exactly.
///
/// # Example
///
/// ```
/// use labelmatch::{Matcher, MatchKind};
///
/// let matcher = Matcher::default();
/// let labels = ["campinas", "R293", "R075"];
///
/// let hit = matcher.best_match("31.r075", labels).unwrap();
/// assert_eq!(hit.candidate, "R075");
/// assert_eq!(hit.score, 1.0);
/// assert_eq!(hit.kind, MatchKind::Exact);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Build a matcher with an explicit configuration.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Normalized form of `query` under this matcher's extension list.
    #[must_use]
    pub fn normalize(&self, query: &str) -> String {
        normalize_with(query, &self.config.extensions)
    }

    /// Score a single `(query, candidate)` pair.
    ///
    /// The exact layer short-circuits at 1.0; otherwise the maximum over
    /// containment, token overlap, edit distance, and Jaro-Winkler wins.
    /// Containment is a floor: the other layers are still computed, but a
    /// substring relationship can only be beaten upward.
    #[must_use]
    pub fn score(&self, query: &str, candidate: &str) -> (f64, MatchKind) {
        let q = self.normalize(query);
        let candidate_lower = candidate.to_lowercase();

        if q == candidate_lower {
            return (1.0, MatchKind::Exact);
        }

        // Naive substring semantics: an empty normalized query is contained
        // in every candidate and lands at the containment floor. Pinned by
        // tests rather than guarded away.
        let containment = if q.contains(&candidate_lower) || candidate_lower.contains(&q) {
            let q_len = q.chars().count();
            let c_len = candidate_lower.chars().count();
            let ratio = q_len.min(c_len) as f64 / q_len.max(c_len) as f64;
            Some(CONTAINMENT_FLOOR + ratio * CONTAINMENT_SPAN)
        } else {
            None
        };

        let mut best = (overlap_score(query, &candidate_lower), MatchKind::TokenOverlap);

        let edit = levenshtein_similarity(&q, &candidate_lower);
        if edit > best.0 {
            best = (edit, MatchKind::EditDistance);
        }

        let jw = jaro_winkler(&q, &candidate_lower);
        if jw > best.0 {
            best = (jw, MatchKind::JaroWinkler);
        }

        if let Some(floor) = containment {
            if floor >= best.0 {
                best = (floor, MatchKind::Containment);
            }
        }

        best
    }

    /// The best-scoring candidate above the threshold, with its score.
    ///
    /// Ties keep the earliest candidate in iteration order. Returns `None`
    /// for an empty candidate sequence or when nothing clears the threshold.
    pub fn best_match<'a, I>(&self, query: &str, candidates: I) -> Option<ScoredCandidate<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<ScoredCandidate<'a>> = None;

        for candidate in candidates {
            let (score, kind) = self.score(query, candidate);
            trace!(candidate, score, kind = %kind, "scored candidate");
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredCandidate {
                    candidate,
                    score,
                    kind,
                });
            }
        }

        match best {
            Some(hit) if hit.score > self.config.threshold => {
                debug!(
                    query,
                    candidate = hit.candidate,
                    score = hit.score,
                    kind = %hit.kind,
                    "accepted match"
                );
                Some(hit)
            }
            Some(hit) => {
                debug!(query, best_score = hit.score, "best candidate below threshold");
                None
            }
            None => None,
        }
    }

    /// Every candidate that clears the threshold, highest score first.
    ///
    /// The sort is stable, so equal scores keep their original order.
    pub fn rank<'a, I>(&self, query: &str, candidates: I) -> Vec<ScoredCandidate<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hits: Vec<ScoredCandidate<'a>> = candidates
            .into_iter()
            .map(|candidate| {
                let (score, kind) = self.score(query, candidate);
                ScoredCandidate {
                    candidate,
                    score,
                    kind,
                }
            })
            .filter(|hit| hit.score > self.config.threshold)
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits
    }
}

/// The candidate that best matches `query`, or `None` when nothing clears
/// the default acceptance threshold.
///
/// An empty candidate sequence yields `None` immediately; no input panics.
///
/// # Example
///
/// ```
/// use labelmatch::find_best_match;
///
/// let labels = ["campinas", "R293", "R075"];
/// assert_eq!(find_best_match("31.r075", labels), Some("R075"));
/// assert_eq!(find_best_match("30.r_293", labels), Some("R293"));
/// assert_eq!(find_best_match("r075.xlsx", labels), Some("R075"));
/// assert_eq!(find_best_match("zzz999", labels), None);
/// assert_eq!(find_best_match("anything", []), None);
/// ```
pub fn find_best_match<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    Matcher::default()
        .best_match(query, candidates)
        .map(|hit| hit.candidate)
}
