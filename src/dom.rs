//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate, giving the pipeline a small
//! stable surface for attribute access, text measurement, ancestor walks
//! and node detachment.

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// The parser is lenient; malformed input still yields a tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get the element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get the element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get the tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of the node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
/// when you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Subtree text with every whitespace run collapsed to a single space
/// and the ends trimmed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    let text = sel.text();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible character count of the subtree text, after normalization.
///
/// Every length threshold in the pipeline is measured this way.
#[inline]
#[must_use]
pub fn text_len(sel: &Selection) -> usize {
    normalized_text(sel).chars().count()
}

// === Tree Navigation ===

/// Get the parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Whether any ancestor of the node has one of the given tag names.
#[must_use]
pub fn has_ancestor_tag(sel: &Selection, tags: &[&str]) -> bool {
    let mut current = parent(sel);
    while current.exists() {
        if let Some(tag) = tag_name(&current) {
            if tags.contains(&tag.as_str()) {
                return true;
            }
        }
        current = parent(&current);
    }
    false
}

/// Number of `<p>` descendants of the node.
#[inline]
#[must_use]
pub fn paragraph_count(sel: &Selection) -> usize {
    sel.select("p").nodes().len()
}

/// Whether the subtree contains embedded media.
#[inline]
#[must_use]
pub fn has_media_descendant(sel: &Selection) -> bool {
    !sel.select("img, video, iframe").is_empty()
}

// === Tree Manipulation ===

/// Detach the selected nodes from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_read_attributes() {
        let doc = parse(r#"<div id="main" class="container">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(class_name(&div), Some("container".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn missing_attributes_are_none() {
        let doc = parse("<div>plain</div>");
        let div = doc.select("div");

        assert_eq!(id(&div), None);
        assert_eq!(class_name(&div), None);
    }

    #[test]
    fn tag_names_are_lowercased_by_the_parser() {
        let doc = parse("<ARTICLE>content</ARTICLE>");
        let article = doc.select("article");
        assert_eq!(tag_name(&article), Some("article".to_string()));
    }

    #[test]
    fn normalized_text_collapses_whitespace() {
        let doc = parse("<p>  one\n\t two   three </p>");
        let p = doc.select("p");

        assert_eq!(normalized_text(&p), "one two three");
        assert_eq!(text_len(&p), 13);
    }

    #[test]
    fn remove_detaches_nodes() {
        let doc = parse(r#"<div><span class="ad">ad</span><p>content</p></div>"#);

        remove(&doc.select(".ad"));

        assert!(doc.select(".ad").is_empty());
        assert!(!doc.select("p").is_empty());
    }

    #[test]
    fn ancestor_walk_finds_enclosing_tags() {
        let doc = parse("<article><div><p id=\"target\">text</p></div></article>");
        let p = doc.select("#target");

        assert!(has_ancestor_tag(&p, &["article", "main"]));
        assert!(has_ancestor_tag(&p, &["div"]));
        assert!(!has_ancestor_tag(&p, &["aside", "nav"]));
    }

    #[test]
    fn paragraph_count_covers_descendants() {
        let doc = parse("<div><p>a</p><section><p>b</p><p>c</p></section></div>");
        let div = doc.select("div").first();
        assert_eq!(paragraph_count(&div), 3);
    }

    #[test]
    fn media_descendants_are_detected() {
        let doc = parse(r#"<div><img src="x.jpg"></div><p id="bare"></p>"#);

        assert!(has_media_descendant(&doc.select("div")));
        assert!(!has_media_descendant(&doc.select("#bare")));
    }
}
