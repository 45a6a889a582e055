//! Pipeline driver: locate, clean, reconstruct.
//!
//! This module wires the cleaning stages together for one article:
//! a whole-document cleanup pass, content-area location, a second
//! cleanup pass inside the located area, and paragraph reconstruction.
//! It is the one code path external callers reach through the
//! crate-level `extract_article*` functions.

use chrono::Utc;
use url::Url;

use crate::clean;
use crate::dom;
use crate::error::{Error, Result};
use crate::locate;
use crate::options::Options;
use crate::paragraphs;
use crate::result::{ArticleSource, CleanStats, ExtractedArticle};
use crate::rules::RuleSet;
use crate::text;

/// Main entry point for article cleaning.
pub(crate) fn extract_content(
    html: &str,
    source: &ArticleSource,
    rules: &RuleSet,
    options: &Options,
) -> Result<ExtractedArticle> {
    options.validate()?;
    let source_url = validate_source_url(&source.url)?;

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Starting article cleaning (HTML length: {} chars)",
            html.len()
        );
    }

    let trimmed = html.trim();
    if trimmed.is_empty() {
        return Err(Error::NoContent);
    }

    let mut warnings = Vec::new();

    // Inputs with no markup at all skip the DOM stages. The raw-text
    // reconstruction path still applies paragraph splitting and the
    // overflow policy, so feed descriptions degrade gracefully.
    if !trimmed.contains('<') {
        warnings.push("No markup found, input treated as plain text".to_string());
        let body_paragraphs = paragraphs::from_text(trimmed, options);
        if body_paragraphs.is_empty() {
            return Err(Error::NoContent);
        }
        let visible = visible_chars(trimmed);
        let stats = CleanStats {
            chars_before: visible,
            chars_after: visible,
            removed_nodes: 0,
        };
        return Ok(build_article(
            source,
            source_url,
            body_paragraphs,
            stats,
            warnings,
        ));
    }

    let document = dom::parse(html);

    let body = document.select("body");
    let chars_before = dom::normalized_text(&body).chars().count();

    // Pass one: whole-document cleanup (scripts, page chrome, ad-rule
    // candidates, promotional blocks, empty shells).
    let mut removed_nodes = clean::clean_document(&document, rules, options);

    // Pick the content area, then clean inside it again. The area can
    // still hold ad fragments that only stand out once the surrounding
    // chrome is gone. Verdicts are re-derived, never cached.
    let area = locate::content_area(&document, options);

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: Content area: <{}> ({} chars)",
            dom::tag_name(&area).unwrap_or_default(),
            dom::text_len(&area)
        );
    }

    removed_nodes += clean::clean_node(&area, rules, options);

    let chars_after = dom::normalized_text(&area).chars().count();
    let stats = CleanStats {
        chars_before,
        chars_after,
        removed_nodes,
    };

    // The conservative operating point removes 10-40% of input text on
    // ad-laden pages. A much larger reduction usually means the page
    // defeated the locator, so surface it to the caller.
    if chars_before >= options.content_min_len && stats.reduction() > 0.6 {
        warnings.push(format!(
            "Removed {:.0}% of input text, above the conservative target range",
            stats.reduction() * 100.0
        ));
    }

    let body_paragraphs = paragraphs::from_content(&area, options);
    if body_paragraphs.is_empty() {
        return Err(Error::NoContent);
    }

    if cfg!(debug_assertions) {
        eprintln!("DEBUG: Cleaning summary:");
        eprintln!("  Visible chars: {chars_before} -> {chars_after}");
        eprintln!("  Removed subtrees: {removed_nodes}");
        eprintln!("  Paragraphs: {}", body_paragraphs.len());
        eprintln!("  Warnings: {}", warnings.len());
    }

    Ok(build_article(
        source,
        source_url,
        body_paragraphs,
        stats,
        warnings,
    ))
}

fn build_article(
    source: &ArticleSource,
    source_url: String,
    body_paragraphs: Vec<String>,
    stats: CleanStats,
    warnings: Vec<String>,
) -> ExtractedArticle {
    ExtractedArticle {
        title: text::clean_title(&source.title),
        body_paragraphs,
        source_url,
        source_name: source.name.clone(),
        extracted_at: Utc::now(),
        stats,
        warnings,
    }
}

/// Check that the source URL is absolute http(s) and return it in
/// normalized form for the attribution link.
fn validate_source_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|_| Error::InvalidSourceUrl(raw.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidSourceUrl(raw.to_string()));
    }
    Ok(parsed.to_string())
}

/// Character count of `text` with whitespace runs collapsed, matching
/// how the DOM-side counts are taken.
fn visible_chars(text: &str) -> usize {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().count()
}
