//! # feedscrub
//!
//! Conservative ad stripping and article cleaning for RSS content
//! pipelines.
//!
//! Given raw HTML (a fetched page or an inline feed fragment), this
//! library locates the main article body, removes advertising and
//! promotional noise, and reconstructs the survivors into clean,
//! publish-ready paragraphs. Removal is deliberately cautious: an
//! element goes only when a structural ad marker and promotional
//! wording agree, and large article-like blocks are never removed no
//! matter what their class names claim.
//!
//! ## Quick Start
//!
//! ```rust
//! use feedscrub::{extract_article, ArticleSource};
//!
//! let html = r#"<html><body><article>
//! <p>The home side controlled the first half and deserved the lead.</p>
//! <p>A second goal after the break settled the contest for good.</p>
//! </article>
//! <div class="ad-banner">Buy now! 50% off replica shirts!</div>
//! </body></html>"#;
//!
//! let source = ArticleSource::new(
//!     "News: Match report",
//!     "https://example.com/report",
//!     "Example Sport",
//! );
//! let article = extract_article(html, &source)?;
//!
//! assert_eq!(article.title, "Match report");
//! assert_eq!(article.body_paragraphs.len(), 2);
//! # Ok::<(), feedscrub::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Ad stripping**: removes a block only when a structural marker
//!   (ad-like class/id) and promotional vocabulary both agree
//! - **Content location**: ordered semantic selectors with
//!   largest-block and body fallbacks
//! - **Paragraph reconstruction**: size bounds, paragraph cap, and
//!   sentence-aware splitting of oversized raw text
//! - **Publish-ready rendering**: minimal safe markup plus a source
//!   attribution block ([`render`])
//!
//! ## Operating point
//!
//! The heuristics target removing roughly 10-40% of input characters
//! on ad-laden pages while preserving the editorial text. Each result
//! carries [`CleanStats`] so callers can monitor where a page landed.

mod error;
mod extract;
mod options;
mod patterns;
mod result;
mod rules;

/// DOM adapter over `dom_query` (parse, text, attributes, removal).
pub mod dom;

/// Element classification: per-node keep/remove verdicts.
pub mod classify;

/// Content-area location within a full document.
pub mod locate;

/// Cleaning pipeline: mark-and-sweep removal passes.
pub mod clean;

/// Paragraph reconstruction from cleaned markup or raw text.
pub mod paragraphs;

/// Text normalization, typography repair, and title cleanup.
pub mod text;

/// Feed-entry content resolution and sufficiency checks.
pub mod feed;

/// HTML and plain-text rendering with the attribution block.
pub mod render;

/// Character encoding detection and byte decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, OverflowPolicy};
pub use result::{ArticleSource, CleanStats, ExtractedArticle};
pub use rules::{AdRule, MatchKind, RuleSet};

/// Cleans one article's HTML using default options and rules.
///
/// # Arguments
///
/// * `html` - The page or fragment HTML as a string slice
/// * `source` - Feed-supplied title, canonical URL, and publication name
///
/// # Returns
///
/// Returns `Ok(ExtractedArticle)` with cleaned paragraphs and stats.
/// Returns `Error::NoContent` when nothing extractable survives, and
/// `Error::InvalidSourceUrl` when the source link is not absolute
/// http(s).
///
/// # Example
///
/// ```rust
/// use feedscrub::{extract_article, ArticleSource};
///
/// let html = "<article><p>The home side controlled the first half and deserved the lead.</p></article>";
/// let source = ArticleSource::new("Match report", "https://example.com/report", "Example Sport");
/// let article = extract_article(html, &source)?;
/// assert_eq!(article.body_paragraphs.len(), 1);
/// # Ok::<(), feedscrub::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article(html: &str, source: &ArticleSource) -> Result<ExtractedArticle> {
    extract_article_with_options(html, source, &Options::default())
}

/// Cleans one article's HTML with custom options.
///
/// # Example
///
/// ```rust
/// use feedscrub::{extract_article_with_options, ArticleSource, Options};
///
/// let html = "<article><p>The home side controlled the first half and deserved the lead.</p></article>";
/// let source = ArticleSource::new("Match report", "https://example.com/report", "Example Sport");
/// let options = Options {
///     max_paragraphs: 8,
///     min_paragraph_len: 40,
///     ..Options::default()
/// };
/// let article = extract_article_with_options(html, &source, &options)?;
/// # Ok::<(), feedscrub::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_with_options(
    html: &str,
    source: &ArticleSource,
    options: &Options,
) -> Result<ExtractedArticle> {
    extract::extract_content(html, source, &RuleSet::default(), options)
}

/// Cleans one article's HTML with a custom rule table.
///
/// The default [`RuleSet`] covers the common ad markers; extend it when
/// a feed uses site-specific class names.
///
/// # Example
///
/// ```rust
/// use feedscrub::{extract_article_with_rules, AdRule, ArticleSource, Options, RuleSet};
///
/// let html = "<article><p>The home side controlled the first half and deserved the lead.</p></article>";
/// let source = ArticleSource::new("Match report", "https://example.com/report", "Example Sport");
///
/// let mut rules = RuleSet::default();
/// rules.ad_rules.push(AdRule::class_contains("outbrain"));
///
/// let article = extract_article_with_rules(html, &source, &rules, &Options::default())?;
/// # Ok::<(), feedscrub::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_with_rules(
    html: &str,
    source: &ArticleSource,
    rules: &RuleSet,
    options: &Options,
) -> Result<ExtractedArticle> {
    extract::extract_content(html, source, rules, options)
}

/// Cleans one article from raw bytes with automatic encoding detection.
///
/// The charset is sniffed from a BOM or HTML meta declarations and the
/// bytes decoded before cleaning. A warning is recorded on the result
/// when the input was not UTF-8.
///
/// # Example
///
/// ```rust
/// use feedscrub::{extract_article_from_bytes, ArticleSource};
///
/// // ISO-8859-1 encoded page (0xE9 = é)
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>Caf\xE9 owners celebrated the final whistle along the high street.</p></article></body></html>";
/// let source = ArticleSource::new("Match report", "https://example.com/report", "Example Sport");
/// let article = extract_article_from_bytes(html, &source)?;
/// assert!(article.body_paragraphs[0].contains("Café"));
/// # Ok::<(), feedscrub::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_from_bytes(html: &[u8], source: &ArticleSource) -> Result<ExtractedArticle> {
    extract_article_from_bytes_with_options(html, source, &Options::default())
}

/// Cleans one article from raw bytes with custom options.
#[allow(clippy::missing_errors_doc)]
pub fn extract_article_from_bytes_with_options(
    html: &[u8],
    source: &ArticleSource,
    options: &Options,
) -> Result<ExtractedArticle> {
    let (html_str, encoding_name) = encoding::decode_html_bytes(html);
    let mut article = extract_article_with_options(&html_str, source, options)?;
    if encoding_name != "UTF-8" {
        article
            .warnings
            .push(format!("Transcoded input from {encoding_name}"));
    }
    Ok(article)
}
