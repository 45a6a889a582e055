//! Feed-entry content resolution.
//!
//! Feed parsers hand over loosely shaped entries: `content` may be a
//! list of value objects, a single object, or a bare string, and the
//! fallback text may live under `summary` or `description`. That shape
//! is resolved here, once, into an explicit union so the rest of the
//! pipeline never touches dynamic structure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::Options;
use crate::text;

/// Content resolved from one feed entry, tagged by origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedEntryContent {
    /// Markup-bearing payload from a structured `content` field.
    StructuredValue(String),
    /// Loose text from a `summary` or `description` field.
    PlainText(String),
    /// The entry carried no usable content field.
    Absent,
}

impl FeedEntryContent {
    /// The raw payload, when present.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StructuredValue(s) | Self::PlainText(s) => Some(s),
            Self::Absent => None,
        }
    }

    /// Whether the payload is substantial enough to clean directly.
    ///
    /// Measured on visible characters, with markup stripped, against
    /// `min_feed_content_len`. Insufficient content tells the caller to
    /// fetch the full page instead.
    #[must_use]
    pub fn is_sufficient(&self, opts: &Options) -> bool {
        match self.as_str() {
            Some(payload) => {
                let visible = text::normalize(&text::strip_markup(payload));
                visible.chars().count() > opts.min_feed_content_len
            }
            None => false,
        }
    }
}

/// Resolve the content union from a parsed feed entry.
///
/// Priority order: a `content` field in any of its shapes, then
/// `summary`, then `description`. Blank payloads are skipped as if the
/// field were missing.
#[must_use]
pub fn resolve_entry(entry: &Value) -> FeedEntryContent {
    if let Some(value) = entry.get("content").and_then(structured_value) {
        return FeedEntryContent::StructuredValue(value);
    }

    for field in ["summary", "description"] {
        if let Some(payload) = entry.get(field).and_then(Value::as_str) {
            if !payload.trim().is_empty() {
                return FeedEntryContent::PlainText(payload.to_string());
            }
        }
    }

    FeedEntryContent::Absent
}

/// Pull the payload string out of a `content` field.
///
/// Accepts a list of `{"value": ...}` objects (first entry wins), a
/// bare list of strings, a single object, or a plain string.
fn structured_value(content: &Value) -> Option<String> {
    let payload = match content {
        Value::Array(items) => {
            let first = items.first()?;
            match first {
                Value::Object(_) => first.get("value")?.as_str()?,
                Value::String(s) => s.as_str(),
                _ => return None,
            }
        }
        Value::Object(_) => content.get("value")?.as_str()?,
        Value::String(s) => s.as_str(),
        _ => return None,
    };

    if payload.trim().is_empty() {
        None
    } else {
        Some(payload.to_string())
    }
}
