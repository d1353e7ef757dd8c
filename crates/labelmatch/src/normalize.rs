#![forbid(unsafe_code)]

//! Normalized-form derivation for noisy query strings.
//!
//! Queries are typically filenames: a numeric prefix, separator junk, and a
//! trailing spreadsheet extension wrapped around the label fragment
//! (`"31.r075.xlsx"`). The pipeline peels those layers in a fixed order:
//!
//! 1. lower-case;
//! 2. strip one trailing recognized extension (`.xlsx`, `.xls`, `.csv`,
//!    `.txt`, `.pdf` by default);
//! 3. strip a leading run of digits, whitespace, `.`, `_`, `-`;
//! 4. remove every remaining `.`, `_`, `-`;
//! 5. trim surrounding whitespace.
//!
//! Candidates never go through this pipeline; they are only lower-cased at
//! the comparison site. The asymmetry is deliberate: queries are messy,
//! labels are clean.
//!
//! # Invariants
//!
//! 1. Normalization is idempotent: the output contains no `.`, `_`, `-` and
//!    never starts with a digit or whitespace, so a second pass is a no-op.
//! 2. Pure and total: any input string, including empty or non-ASCII,
//!    produces a defined output without panicking.

/// Trailing extensions recognized by default, lower-case, without the dot.
///
/// `xlsx` is listed before `xls` so the longer suffix is tried first.
pub const DEFAULT_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv", "txt", "pdf"];

/// Characters treated as separator junk inside a query.
fn is_separator(c: char) -> bool {
    matches!(c, '.' | '_' | '-')
}

/// Derive the normalized form of a query using the default extension list.
///
/// # Example
///
/// ```
/// use labelmatch::normalize;
///
/// assert_eq!(normalize("31.r075"), "r075");
/// assert_eq!(normalize("30.r_293"), "r293");
/// assert_eq!(normalize("R075.xlsx"), "r075");
/// assert_eq!(normalize("1. profissionais_campinas"), "profissionaiscampinas");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    normalize_with(raw, DEFAULT_EXTENSIONS)
}

/// Derive the normalized form of a query against a custom extension list.
///
/// Extensions must be lower-case and dot-free; [`crate::MatcherConfig`]
/// enforces that when it accepts caller-supplied lists.
#[must_use]
pub fn normalize_with<S: AsRef<str>>(raw: &str, extensions: &[S]) -> String {
    let lowered = raw.to_lowercase();

    let mut stem = lowered.as_str();
    for ext in extensions {
        if let Some(rest) = stem
            .strip_suffix(ext.as_ref())
            .and_then(|rest| rest.strip_suffix('.'))
        {
            stem = rest;
            break;
        }
    }

    let stem = stem.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c.is_whitespace() || is_separator(c)
    });

    let cleaned: String = stem.chars().filter(|c| !is_separator(*c)).collect();
    cleaned.trim().to_string()
}
