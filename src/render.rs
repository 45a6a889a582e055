//! Publish-ready rendering of extracted articles.
//!
//! Output is minimal markup: one `<p>` per body paragraph, an optional
//! `<strong>` lead paragraph, and a trailing attribution block linking
//! back to the source. Paragraph text, URLs and source names are all
//! HTML-escaped before they reach the output string.

use crate::options::Options;
use crate::result::ExtractedArticle;

/// Renders the article body as HTML paragraphs followed by the
/// attribution trailer.
///
/// Paragraphs are separated by blank lines. When
/// `options.bold_lead_paragraph` is set the first paragraph is wrapped
/// in `<strong>`. The trailer is always appended, even for an article
/// with no surviving paragraphs, so downstream consumers can rely on
/// the source link being present.
#[must_use]
pub fn to_html(article: &ExtractedArticle, options: &Options) -> String {
    let mut out = String::new();
    for (index, paragraph) in article.body_paragraphs.iter().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
        }
        let escaped = escape_html(paragraph);
        if index == 0 && options.bold_lead_paragraph {
            out.push_str("<p><strong>");
            out.push_str(&escaped);
            out.push_str("</strong></p>");
        } else {
            out.push_str("<p>");
            out.push_str(&escaped);
            out.push_str("</p>");
        }
    }
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(&attribution_html(&article.source_url, &article.source_name));
    out
}

/// Renders the article body as plain text: paragraphs joined by blank
/// lines with a final attribution line.
#[must_use]
pub fn to_text(article: &ExtractedArticle) -> String {
    let mut out = article.body_paragraphs.join("\n\n");
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str("Originally published at: ");
    out.push_str(&article.source_name);
    out.push_str(" (");
    out.push_str(&article.source_url);
    out.push(')');
    out
}

fn attribution_html(source_url: &str, source_name: &str) -> String {
    format!(
        "<hr>\n<p><em>Originally published at: <a href=\"{}\" target=\"_blank\" \
         rel=\"noopener noreferrer\">{}</a></em></p>",
        escape_html(source_url),
        escape_html(source_name)
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
