//! Character encoding detection and decoding.
//!
//! Feed pipelines hand this crate raw fetched bytes more often than
//! clean UTF-8. This module sniffs the charset (BOM first, then HTML
//! meta declarations) and decodes to a `String` the rest of the engine
//! can consume.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the character encoding of raw HTML bytes.
///
/// Checks, in order:
/// 1. A byte-order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. Falls back to UTF-8
///
/// Only the first 1024 bytes are examined for meta declarations.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    if let Some(charset) = extract_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    if let Some(charset) = extract_http_equiv_charset(&head_str) {
        if let Some(encoding) = Encoding::for_label(charset.as_bytes()) {
            return encoding;
        }
    }

    UTF_8
}

/// Decode raw HTML bytes to a UTF-8 string.
///
/// Returns the decoded text and the name of the encoding that was
/// actually used. Invalid sequences are replaced with the Unicode
/// replacement character rather than failing, and any leading BOM is
/// stripped.
///
/// # Examples
///
/// ```
/// use feedscrub::encoding::decode_html_bytes;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let (text, encoding_name) = decode_html_bytes(html);
/// assert!(text.contains("Hello, World!"));
/// assert_eq!(encoding_name, "UTF-8");
/// ```
#[must_use]
pub fn decode_html_bytes(html: &[u8]) -> (String, &'static str) {
    let declared = detect_encoding(html);
    // decode() re-checks the BOM itself, so a BOM always wins over a
    // conflicting meta declaration.
    let (decoded, used, _had_errors) = declared.decode(html);
    (decoded.into_owned(), used.name())
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_http_equiv_charset(html: &str) -> Option<String> {
    HTTP_EQUIV_CHARSET
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
