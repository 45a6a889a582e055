//! Compiled regex patterns and CSS selectors for the cleaning pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock`. Patterns
//! are organized by their purpose in the pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Promotional Text Patterns
// =============================================================================

/// Phrases that only appear in promotional copy, never in editorial prose.
///
/// These are deliberately loose (`buy\s+now` matches "Buy now!" anywhere in
/// the block), so the pipeline applies them only to blocks at or below the
/// promotional scope length. Large blocks are never judged by these alone.
pub static PROMO_TEXT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"sponsored\s+by\s+\w+",
        r"buy\s+now",
        r"shop\s+now",
        r"sign\s+up\s+now",
        r"subscribe\s+to\s+our\s+newsletter",
        r"special\s+offer",
        r"limited\s+time",
        r"while\s+supplies\s+last",
        r"click\s+here\s+to\s+\w+",
        r"\d+%\s*off",
    ]
    .iter()
    .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("PROMO_TEXT regex"))
    .collect()
});

/// Returns `true` if any promotional phrase matches `text`.
///
/// Callers are responsible for the scope limit; this function does not
/// look at the length of `text`.
#[must_use]
pub fn is_promotional(text: &str) -> bool {
    PROMO_TEXT.iter().any(|pattern| pattern.is_match(text))
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches a blank line: the boundary between paragraphs in plain text.
pub static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("PARAGRAPH_BREAK regex"));

/// Matches anything shaped like a markup tag.
///
/// Used on the opaque-text degradation path where the input failed to
/// parse as a document but may still carry tag remnants.
pub static TAG_REMNANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_REMNANT regex"));

// =============================================================================
// Title Cleaning Patterns
// =============================================================================

/// Feed-style prefixes stripped from titles, matched case-insensitively.
///
/// Covers wire prefixes ("Breaking: ", "News - ") and bracketed category
/// tags ("[football] ").
pub static TITLE_PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*(?:News|Update|Report|Breaking)\s*[-:|]\s*",
        r"^\s*Latest\s*[-:|]\s*",
        r"^\s*\[\w+\]\s*",
    ]
    .iter()
    .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("TITLE_PREFIXES regex"))
    .collect()
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Content-area selectors, tried in order. The first match whose visible
/// text exceeds the content minimum wins.
pub const CONTENT_AREA_SELECTORS: &[&str] = &[
    "article",
    "[role=\"main\"]",
    ".article-content",
    ".post-content",
    ".entry-content",
    ".story-body",
    ".article-body",
    "#content",
    ".main-content",
    ".story-content",
    "div[itemprop=\"articleBody\"]",
];

/// Candidate blocks for the largest-text fallback when no content-area
/// selector matches.
pub const FALLBACK_BLOCK_SELECTOR: &str = "div, article, section";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promo_text_matches_commercial_phrases() {
        assert!(is_promotional("Buy now! 50% off!"));
        assert!(is_promotional("Subscribe to our Newsletter today"));
        assert!(is_promotional("Limited time offer, while supplies last"));
        assert!(is_promotional("This post is sponsored by MegaCorp"));
        assert!(is_promotional("Click here to register"));
    }

    #[test]
    fn promo_text_ignores_editorial_prose() {
        assert!(!is_promotional(
            "The team now leads the table after a strong season."
        ));
        assert!(!is_promotional("Shoppers reported long queues downtown."));
    }

    #[test]
    fn whitespace_normalize_collapses_runs() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \t\n  world", " ");
        assert_eq!(result, "hello world");
    }

    #[test]
    fn paragraph_break_matches_blank_lines() {
        let parts: Vec<&str> = PARAGRAPH_BREAK.split("one\n\ntwo\n   \nthree").collect();
        assert_eq!(parts, vec!["one", "two", "three"]);
    }

    #[test]
    fn title_prefixes_match_wire_prefixes() {
        assert!(TITLE_PREFIXES[0].is_match("Breaking: Team wins"));
        assert!(TITLE_PREFIXES[0].is_match("news - quiet day"));
        assert!(TITLE_PREFIXES[1].is_match("Latest | transfer news"));
        assert!(TITLE_PREFIXES[2].is_match("[football] Derby preview"));
        assert!(!TITLE_PREFIXES[0].is_match("Newsroom expands"));
    }

    #[test]
    fn tag_remnant_matches_markup() {
        assert!(TAG_REMNANT.is_match("before <p class=\"x\"> after"));
        assert!(!TAG_REMNANT.is_match("the score stayed 2 > 1 until stoppage time"));
    }
}
