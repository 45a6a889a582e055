//! Paragraph reconstruction.
//!
//! Turns a cleaned content area (or a raw text fallback) into the
//! ordered paragraph list of the final article: normalized, filtered by
//! minimum length, capped, and with oversized raw-text segments either
//! regrouped at sentence boundaries or hard-truncated, depending on the
//! configured overflow policy.

use crate::dom::{self, Selection};
use crate::options::{Options, OverflowPolicy};
use crate::patterns;
use crate::text;

/// Build paragraphs from a cleaned content area.
///
/// When the area carries `<p>` markup, each paragraph's text is taken
/// as authored. Without any paragraph markup the area's raw text goes
/// through [`from_text`] instead. If filtering leaves nothing, a single
/// fallback paragraph holds the area's whole normalized text.
#[must_use]
pub fn from_content(area: &Selection, opts: &Options) -> Vec<String> {
    let nodes = area.select("p").nodes().to_vec();
    if nodes.is_empty() {
        return from_text(&dom::text_content(area), opts);
    }

    let mut paragraphs = Vec::new();
    for node in &nodes {
        let paragraph = text::normalize(&dom::text_content(&Selection::from(*node)));
        if paragraph.chars().count() >= opts.min_paragraph_len {
            paragraphs.push(paragraph);
        }
        if paragraphs.len() == opts.max_paragraphs {
            break;
        }
    }

    if paragraphs.is_empty() {
        return fallback_paragraph(&dom::text_content(area), opts);
    }
    paragraphs
}

/// Build paragraphs from raw text, splitting on blank lines.
///
/// Segments longer than `segment_split_len` are handled by the overflow
/// policy: regrouped into sentence chunks near `regroup_target_len`, or
/// cut hard with an ellipsis. If filtering leaves nothing, a single
/// fallback paragraph holds the whole normalized input.
#[must_use]
pub fn from_text(raw: &str, opts: &Options) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for segment in patterns::PARAGRAPH_BREAK.split(raw) {
        let normalized = text::normalize(segment);
        if normalized.is_empty() {
            continue;
        }
        if normalized.chars().count() > opts.segment_split_len {
            match opts.overflow {
                OverflowPolicy::SplitSentences => {
                    segments.extend(regroup(split_sentences(&normalized), opts.regroup_target_len));
                }
                OverflowPolicy::Truncate { max_chars } => {
                    segments.push(truncate_chars(&normalized, max_chars));
                }
            }
        } else {
            segments.push(normalized);
        }
    }

    let paragraphs: Vec<String> = segments
        .into_iter()
        .filter(|p| p.chars().count() >= opts.min_paragraph_len)
        .take(opts.max_paragraphs)
        .collect();

    if paragraphs.is_empty() {
        return fallback_paragraph(raw, opts);
    }
    paragraphs
}

/// The single fallback paragraph for input where nothing survived
/// filtering. Empty input yields an empty list, not an empty paragraph.
fn fallback_paragraph(raw: &str, opts: &Options) -> Vec<String> {
    let whole = text::normalize(raw);
    if whole.is_empty() {
        return Vec::new();
    }
    match opts.overflow {
        OverflowPolicy::Truncate { max_chars } => vec![truncate_chars(&whole, max_chars)],
        OverflowPolicy::SplitSentences => vec![whole],
    }
}

/// Split normalized text at sentence terminators.
///
/// A boundary is a run of `.`, `!` or `?` followed by whitespace (or
/// the end of input). Abbreviations split too aggressively here, but
/// regrouping glues short fragments back together.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            while let Some(&next) = chars.peek() {
                if matches!(next, '.' | '!' | '?') {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek().is_none_or(|next| next.is_whitespace()) {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
    }
    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Greedily pack sentences into chunks capped near `target` characters.
///
/// A single sentence longer than the target stands alone; the packing
/// never splits inside a sentence.
fn regroup(sentences: Vec<String>, target: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        if current.is_empty() {
            current = sentence;
            continue;
        }
        if current.chars().count() + 1 + sentence.chars().count() <= target {
            current.push(' ');
            current.push_str(&sentence);
        } else {
            chunks.push(current);
            current = sentence;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Cut to at most `max_chars` characters, appending an ellipsis when
/// anything was dropped.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
