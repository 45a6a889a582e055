//! Result types for cleaning and extraction output.
//!
//! This module defines the structured output of the pipeline: the
//! publish-ready article and the cleaning statistics callers use to
//! monitor how much of the input was removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source information for one article, supplied by the caller.
///
/// The fields come from the feed entry: the raw title, the article's
/// canonical link, and the display name of the publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Raw title as the feed delivered it.
    pub title: String,

    /// Absolute URL of the original article.
    pub url: String,

    /// Display name of the source publication.
    pub name: String,
}

impl ArticleSource {
    /// Convenience constructor.
    #[must_use]
    pub fn new(title: &str, url: &str, name: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            name: name.to_string(),
        }
    }
}

/// Character counts from the cleaning stage.
///
/// `chars_before` counts the visible text of the parsed document before
/// any cleaning; `chars_after` counts the visible text of the cleaned
/// content area. The conservative operating point keeps the reduction
/// between roughly 10% and 40% on ad-laden pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    /// Visible characters in the document before cleaning.
    pub chars_before: usize,

    /// Visible characters in the cleaned content area.
    pub chars_after: usize,

    /// Subtrees detached across both cleaning passes.
    pub removed_nodes: usize,
}

impl CleanStats {
    /// Fraction of input characters removed, in `0.0..=1.0`.
    ///
    /// Returns `0.0` for empty input.
    #[must_use]
    pub fn reduction(&self) -> f64 {
        if self.chars_before == 0 {
            return 0.0;
        }
        let removed = self.chars_before.saturating_sub(self.chars_after);
        removed as f64 / self.chars_before as f64
    }
}

/// A cleaned, publish-ready article.
///
/// Immutable once constructed; the external publisher consumes it.
/// `body_paragraphs` holds plain normalized text, one entry per
/// paragraph, already filtered and capped. Rendering to markup
/// (including the attribution trailer) is done by [`crate::render`].
#[derive(Debug, Clone, Default)]
pub struct ExtractedArticle {
    /// Cleaned title, plain text.
    pub title: String,

    /// Ordered body paragraphs, plain normalized text.
    pub body_paragraphs: Vec<String>,

    /// Absolute URL of the original article.
    pub source_url: String,

    /// Display name of the source publication.
    pub source_name: String,

    /// When this article was extracted.
    pub extracted_at: DateTime<Utc>,

    /// Character counts from the cleaning stage.
    pub stats: CleanStats,

    /// Non-fatal conditions encountered during extraction, such as a
    /// fallback to treating the input as opaque text.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_zero_for_empty_input() {
        let stats = CleanStats::default();
        assert!((stats.reduction() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reduction_reports_removed_share() {
        let stats = CleanStats {
            chars_before: 1000,
            chars_after: 750,
            removed_nodes: 3,
        };
        assert!((stats.reduction() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn reduction_never_goes_negative() {
        // chars_after can exceed chars_before when the located content
        // area normalizes differently than the raw document.
        let stats = CleanStats {
            chars_before: 100,
            chars_after: 120,
            removed_nodes: 0,
        };
        assert!((stats.reduction() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn article_source_round_trips_through_json() {
        let source = ArticleSource::new("Title", "https://example.com/a", "Example News");
        let json = serde_json::to_string(&source).ok();
        assert!(json.is_some());
        if let Some(json) = json {
            let back: Option<ArticleSource> = serde_json::from_str(&json).ok();
            assert_eq!(back, Some(source));
        }
    }
}
