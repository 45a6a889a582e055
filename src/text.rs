//! Text normalization utilities.
//!
//! Leaf helpers used by every stage above them: whitespace collapsing,
//! typography repair, markup-remnant stripping and title cleanup.

use crate::patterns;

/// Replace typographic punctuation with its plain ASCII form.
fn repair_typography(text: &str) -> String {
    text.replace(['\u{201C}', '\u{201D}', '\u{201E}'], "\"") // curly double quotes
        .replace(['\u{2018}', '\u{2019}'], "'") // curly single quotes
        .replace(['\u{2013}', '\u{2014}'], "-") // en and em dashes
        .replace('\u{2026}', "...") // ellipsis
}

/// Normalize one run of text: fix typography, collapse whitespace, trim.
///
/// Newlines are collapsed too, so this must be applied per paragraph,
/// never across paragraph boundaries.
#[must_use]
pub fn normalize(text: &str) -> String {
    let repaired = repair_typography(text);
    patterns::WHITESPACE_NORMALIZE
        .replace_all(repaired.trim(), " ")
        .into_owned()
}

/// Remove anything shaped like a markup tag, leaving the text between.
///
/// Used on input that failed to parse as a document. Tags are replaced
/// with a space so adjacent words do not fuse; newlines survive, since
/// they still mark paragraph boundaries on this path.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    patterns::TAG_REMNANT.replace_all(text, " ").into_owned()
}

/// Clean a feed title: normalize whitespace and strip wire-style
/// prefixes ("Breaking: ", "[football] ").
///
/// If stripping would leave nothing, the normalized original is
/// returned instead.
#[must_use]
pub fn clean_title(title: &str) -> String {
    let normalized = normalize(title);

    let mut cleaned = normalized.clone();
    for prefix in patterns::TITLE_PREFIXES.iter() {
        cleaned = prefix.replace(&cleaned, "").into_owned();
    }
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        normalized
    } else {
        cleaned.to_string()
    }
}
