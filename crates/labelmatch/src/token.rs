#![forbid(unsafe_code)]

//! Token extraction and word-level overlap scoring.
//!
//! A token is a maximal run of ASCII letters and digits (pure or mixed) of
//! length ≥ 2. The minimum length keeps stray single letters and digits from
//! contributing noise. Characters outside the ASCII alphanumeric range never
//! form tokens; they act as boundaries, like punctuation.
//!
//! The overlap score compares query tokens against candidate tokens. Callers
//! hand in the original-cased query but the lower-cased candidate, matching
//! the asymmetry in [`crate::normalize`]. Comparison is literal, so a query
//! that arrives in upper case only meets candidate tokens through the other
//! scoring layers.

use smallvec::SmallVec;

/// Contribution of an exactly-equal token pair.
const TOKEN_EXACT: f64 = 1.0;
/// Contribution of a partial pair (both length ≥ 3, one contains the other).
const TOKEN_PARTIAL: f64 = 0.8;
/// Minimum token length for the partial-containment rule.
const PARTIAL_MIN_LEN: usize = 3;

/// Extract tokens from `text`: maximal ASCII-alphanumeric runs, length ≥ 2.
///
/// Returned slices borrow from `text`.
///
/// # Example
///
/// ```
/// use labelmatch::token::tokens;
///
/// let toks = tokens("31.r075_final");
/// assert_eq!(toks.as_slice(), ["31", "r075", "final"]);
/// ```
#[must_use]
pub fn tokens(text: &str) -> SmallVec<[&str; 8]> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() >= 2)
        .collect()
}

/// Word-level overlap score between a query and a lower-cased candidate.
///
/// Every query token contributes at most once: an exactly-equal candidate
/// token is worth 1.0, otherwise the first partial containment (both sides
/// length ≥ 3) is worth 0.8. The accumulator is
/// divided by the larger token count, so unmatched tokens on either side
/// dilute the score. Zero when either side has no tokens.
#[must_use]
pub fn overlap_score(query: &str, candidate_lower: &str) -> f64 {
    let query_tokens = tokens(query);
    let candidate_tokens = tokens(candidate_lower);
    if query_tokens.is_empty() || candidate_tokens.is_empty() {
        return 0.0;
    }

    let mut acc = 0.0;
    for qt in &query_tokens {
        if candidate_tokens.iter().any(|ct| ct == qt) {
            acc += TOKEN_EXACT;
        } else if candidate_tokens.iter().any(|ct| partial_pair(qt, ct)) {
            acc += TOKEN_PARTIAL;
        }
    }

    acc / query_tokens.len().max(candidate_tokens.len()) as f64
}

/// Whether two tokens qualify for the partial-containment contribution.
fn partial_pair(a: &str, b: &str) -> bool {
    a.len() >= PARTIAL_MIN_LEN
        && b.len() >= PARTIAL_MIN_LEN
        && (a.contains(b) || b.contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Extraction ──────────────────────────────────────────────────

    #[test]
    fn splits_on_non_alphanumeric() {
        assert_eq!(tokens("relatorio_mensal-2024").as_slice(), ["relatorio", "mensal", "2024"]);
    }

    #[test]
    fn mixed_alphanumeric_runs_stay_whole() {
        assert_eq!(tokens("r075").as_slice(), ["r075"]);
        assert_eq!(tokens("31.r075").as_slice(), ["31", "r075"]);
    }

    #[test]
    fn single_char_fragments_are_dropped() {
        assert_eq!(tokens("a b cd").as_slice(), ["cd"]);
        assert_eq!(tokens("x-1-yz").as_slice(), ["yz"]);
    }

    #[test]
    fn empty_and_punctuation_only_yield_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("..__--").is_empty());
    }

    #[test]
    fn non_ascii_acts_as_boundary() {
        // 'ã' splits the run; surviving fragments must still reach length 2.
        assert!(tokens("são").is_empty());
        assert_eq!(tokens("sãopaulo").as_slice(), ["paulo"]);
    }

    // ── Overlap scoring ─────────────────────────────────────────────

    #[test]
    fn exact_token_pair_scores_full() {
        assert_eq!(overlap_score("r075", "r075"), 1.0);
    }

    #[test]
    fn partial_containment_scores_reduced() {
        // "relatorio" contains "relat": one partial pair over one token each.
        assert!((overlap_score("relatorio", "relat") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn short_tokens_never_pair_partially() {
        // "ab" ⊂ "abc" but "ab" is below the length-3 floor.
        assert_eq!(overlap_score("ab", "abc"), 0.0);
    }

    #[test]
    fn unmatched_tokens_dilute() {
        // One exact pair, but the candidate has two tokens.
        let score = overlap_score("r075", "r075 extra");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn each_query_token_counts_once() {
        // Query token matches two candidate tokens; still one contribution,
        // divided by the larger count.
        let score = overlap_score("r075", "r075 r075");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_sides_score_zero() {
        assert_eq!(overlap_score("", "r075"), 0.0);
        assert_eq!(overlap_score("r075", ""), 0.0);
        assert_eq!(overlap_score("", ""), 0.0);
    }

    #[test]
    fn case_mismatch_is_literal() {
        // Query tokens keep their original case; no folding happens here.
        assert_eq!(overlap_score("R075", "r075"), 0.0);
    }
}
