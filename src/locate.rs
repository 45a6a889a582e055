//! Content-area locator.
//!
//! Finds the subtree most likely to hold the article body so the second
//! cleaning pass and paragraph extraction can ignore the rest of the
//! page.

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns;

/// Locate the article's content area.
///
/// Tries the known content selectors in order and takes the first whose
/// visible text exceeds `content_min_len`. When none qualifies, falls
/// back to the single largest text block, then to `<body>`, then to the
/// document root.
#[must_use]
pub fn content_area<'a>(document: &'a Document, opts: &Options) -> Selection<'a> {
    for selector in patterns::CONTENT_AREA_SELECTORS {
        let candidate = document.select(selector).first();
        if candidate.exists() && dom::text_len(&candidate) > opts.content_min_len {
            return candidate;
        }
    }

    if let Some(block) = largest_block(document) {
        return block;
    }

    let body = document.select("body").first();
    if body.exists() {
        return body;
    }
    document.select("html").first()
}

/// The block element with the most visible text.
///
/// The compare is strictly greater, so on equal lengths the earliest
/// element in document order wins. Nested candidates resolve the same
/// way: a wrapper never loses to the block it wraps.
fn largest_block<'a>(document: &'a Document) -> Option<Selection<'a>> {
    let candidates = document.select(patterns::FALLBACK_BLOCK_SELECTOR);

    let mut best: Option<(usize, Selection<'a>)> = None;
    for node in candidates.nodes() {
        let sel = Selection::from(*node);
        let len = dom::text_len(&sel);
        if len == 0 {
            continue;
        }
        let replace = match &best {
            Some((best_len, _)) => len > *best_len,
            None => true,
        };
        if replace {
            best = Some((len, sel));
        }
    }

    best.map(|(_, sel)| sel)
}
