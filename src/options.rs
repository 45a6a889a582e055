//! Configuration options for cleaning and reconstruction.
//!
//! The `Options` struct carries the thresholds that tune the
//! precision/recall tradeoff of the classifier and the shape of the
//! reconstructed output. The rule lists themselves live in
//! [`crate::rules::RuleSet`].

use crate::error::{Error, Result};

/// Policy for paragraphs that exceed the split threshold.
///
/// Earlier pipeline iterations handled oversized text differently, so
/// both behaviors are available here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Split oversized text at sentence boundaries and regroup the
    /// sentences into chunks near the regroup target length.
    SplitSentences,

    /// Hard-truncate any paragraph longer than `max_chars` and append
    /// a `"..."` truncation marker. The marker is part of the emitted
    /// paragraph text.
    Truncate {
        /// Maximum characters per paragraph before truncation.
        max_chars: usize,
    },
}

impl OverflowPolicy {
    /// Paragraph cap used by the hard-truncation pipelines.
    pub const LEGACY_TRUNCATE_CHARS: usize = 3000;
}

/// Configuration options for cleaning and reconstruction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use feedscrub::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_paragraphs: 8,
///     min_paragraph_len: 40,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum length of an emitted paragraph (characters, after trimming).
    ///
    /// Shorter paragraphs are dropped during reconstruction. A single
    /// fallback paragraph may still be shorter when nothing else survives.
    ///
    /// Default: `30`
    pub min_paragraph_len: usize,

    /// Maximum number of body paragraphs in the output.
    ///
    /// The source-attribution trailer emitted by rendering does not
    /// count against this cap.
    ///
    /// Default: `12`
    pub max_paragraphs: usize,

    /// Minimum text length for a content-area candidate (characters).
    ///
    /// The locator accepts the first candidate selector whose text
    /// exceeds this threshold.
    ///
    /// Default: `200`
    pub content_min_len: usize,

    /// Text length above which a node qualifies for the large-block
    /// keep override (characters).
    ///
    /// Nodes above this length that also carry an editorial keyword or
    /// enough paragraph children are never removed, regardless of
    /// ad-like class names.
    ///
    /// Default: `300`
    pub large_block_len: usize,

    /// Paragraph-descendant count above which a large block is forced
    /// to keep even without an editorial keyword.
    ///
    /// Default: `2`
    pub large_block_min_paragraphs: usize,

    /// Maximum text length for promotional-regex removal (characters).
    ///
    /// A promotional phrase only removes a node when the node's whole
    /// text stays under this bound, so a phrase buried in a large
    /// editorial block never takes the block down.
    ///
    /// Default: `200`
    pub promo_scope_len: usize,

    /// Segment length above which raw text is re-split at sentence
    /// boundaries (characters).
    ///
    /// Default: `500`
    pub segment_split_len: usize,

    /// Target chunk length when regrouping split sentences (characters).
    ///
    /// Default: `400`
    pub regroup_target_len: usize,

    /// Minimum visible length for inline feed content to be considered
    /// sufficient (characters).
    ///
    /// Below this, `feed::is_sufficient` reports that the caller should
    /// fetch the full article page instead.
    ///
    /// Default: `100`
    pub min_feed_content_len: usize,

    /// Policy for oversized paragraphs.
    ///
    /// Default: `OverflowPolicy::SplitSentences`
    pub overflow: OverflowPolicy,

    /// Wrap the first rendered paragraph in `<strong>`.
    ///
    /// Matches the formatter variant that bolds the lead paragraph.
    ///
    /// Default: `false`
    pub bold_lead_paragraph: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_paragraph_len: 30,
            max_paragraphs: 12,
            content_min_len: 200,
            large_block_len: 300,
            large_block_min_paragraphs: 2,
            promo_scope_len: 200,
            segment_split_len: 500,
            regroup_target_len: 400,
            min_feed_content_len: 100,
            overflow: OverflowPolicy::SplitSentences,
            bold_lead_paragraph: false,
        }
    }
}

impl Options {
    /// Check that the thresholds describe a usable configuration.
    ///
    /// Returns `Error::ConfigError` for settings that can never produce
    /// output, such as a zero paragraph cap.
    pub fn validate(&self) -> Result<()> {
        if self.max_paragraphs == 0 {
            return Err(Error::ConfigError(
                "max_paragraphs must be at least 1".to_string(),
            ));
        }
        if self.regroup_target_len == 0 {
            return Err(Error::ConfigError(
                "regroup_target_len must be at least 1".to_string(),
            ));
        }
        if let OverflowPolicy::Truncate { max_chars } = self.overflow {
            if max_chars == 0 {
                return Err(Error::ConfigError(
                    "Truncate max_chars must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.min_paragraph_len, 30);
        assert_eq!(opts.max_paragraphs, 12);
        assert_eq!(opts.content_min_len, 200);
        assert_eq!(opts.large_block_len, 300);
        assert_eq!(opts.large_block_min_paragraphs, 2);
        assert_eq!(opts.promo_scope_len, 200);
        assert_eq!(opts.segment_split_len, 500);
        assert_eq!(opts.regroup_target_len, 400);
        assert_eq!(opts.min_feed_content_len, 100);
        assert_eq!(opts.overflow, OverflowPolicy::SplitSentences);
        assert!(!opts.bold_lead_paragraph);
    }

    #[test]
    fn test_default_options_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn test_zero_paragraph_cap_is_rejected() {
        let opts = Options {
            max_paragraphs: 0,
            ..Options::default()
        };

        assert!(matches!(opts.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_zero_truncate_cap_is_rejected() {
        let opts = Options {
            overflow: OverflowPolicy::Truncate { max_chars: 0 },
            ..Options::default()
        };

        assert!(matches!(opts.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_legacy_truncate_policy() {
        let opts = Options {
            overflow: OverflowPolicy::Truncate {
                max_chars: OverflowPolicy::LEGACY_TRUNCATE_CHARS,
            },
            ..Options::default()
        };

        assert!(opts.validate().is_ok());
        assert_eq!(
            opts.overflow,
            OverflowPolicy::Truncate { max_chars: 3000 }
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            large_block_len: 500,
            promo_scope_len: 120,
            max_paragraphs: 8,
            ..Options::default()
        };

        assert_eq!(opts.large_block_len, 500);
        assert_eq!(opts.promo_scope_len, 120);
        assert_eq!(opts.max_paragraphs, 8);
        assert!(opts.validate().is_ok());
    }
}
