//! Element classifier: the two-signal removal rule and its large-block
//! override.
//!
//! Class and id substrings alone are not enough to remove a block;
//! naive selector matching is how earlier pipelines destroyed most of
//! an article. Removal requires a structural ad marker plus commercial
//! text, and large article-shaped blocks are kept no matter what their
//! attributes claim.

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::patterns;
use crate::rules::RuleSet;

/// Classification outcome for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Remove,
}

/// Everything the classifier looks at, gathered once per element.
#[derive(Debug, Clone, Default)]
pub struct ElementFacts {
    /// Lowercase tag name.
    pub tag: String,
    /// Raw `class` attribute, empty when absent.
    pub class_attr: String,
    /// Raw `id` attribute, empty when absent.
    pub id_attr: String,
    /// Normalized visible text of the whole subtree.
    pub text: String,
    /// Number of `<p>` descendants.
    pub paragraph_count: usize,
}

impl ElementFacts {
    /// Snapshot the facts of one selected element.
    #[must_use]
    pub fn from_selection(sel: &Selection) -> Self {
        Self {
            tag: dom::tag_name(sel).unwrap_or_default(),
            class_attr: dom::class_name(sel).unwrap_or_default(),
            id_attr: dom::id(sel).unwrap_or_default(),
            text: dom::normalized_text(sel),
            paragraph_count: dom::paragraph_count(sel),
        }
    }

    /// Visible character count.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Decide whether one element is an ad container.
///
/// Pure over the gathered facts; the caller performs the actual
/// detachment. Decision order, first match wins:
///
/// 1. `script`, `style` and `noscript` are removed unconditionally;
/// 2. a promotional phrase inside a small block removes it;
/// 3. a large block containing editorial vocabulary, or holding more
///    than a couple of paragraphs, is kept regardless of any ad-looking
///    class or id;
/// 4. a structural ad marker combined with commercial vocabulary in the
///    text removes the block;
/// 5. everything else is kept.
#[must_use]
pub fn classify(facts: &ElementFacts, rules: &RuleSet, opts: &Options) -> Verdict {
    if rules.is_always_remove(&facts.tag) {
        return Verdict::Remove;
    }

    let text_len = facts.text_len();

    if text_len <= opts.promo_scope_len && patterns::is_promotional(&facts.text) {
        return Verdict::Remove;
    }

    if text_len > opts.large_block_len
        && (rules.has_editorial_keyword(&facts.text)
            || facts.paragraph_count > opts.large_block_min_paragraphs)
    {
        return Verdict::Keep;
    }

    if rules.has_ad_marker(&facts.tag, &facts.class_attr, &facts.id_attr)
        && rules.has_promo_vocabulary(&facts.text)
    {
        return Verdict::Remove;
    }

    Verdict::Keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(tag: &str, class: &str, id: &str, text: &str) -> ElementFacts {
        ElementFacts {
            tag: tag.to_string(),
            class_attr: class.to_string(),
            id_attr: id.to_string(),
            text: text.to_string(),
            paragraph_count: 0,
        }
    }

    fn defaults() -> (RuleSet, Options) {
        (RuleSet::default(), Options::default())
    }

    #[test]
    fn scripts_are_always_removed() {
        let (rules, opts) = defaults();
        let long_text = "var x = 1; ".repeat(100);
        let f = facts("script", "", "", &long_text);
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);
    }

    #[test]
    fn small_promotional_blocks_are_removed() {
        let (rules, opts) = defaults();
        let f = facts("div", "ad-banner", "", "Buy now! 50% off!");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);

        // No ad-like class at all: the phrase alone is enough below the
        // large-block threshold.
        let f = facts("div", "", "", "Subscribe to our newsletter today");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);
    }

    #[test]
    fn ad_marker_without_commercial_text_is_kept() {
        let (rules, opts) = defaults();
        let f = facts("div", "ad-banner", "", "Saturday's result in brief.");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Keep);
    }

    #[test]
    fn ad_marker_with_commercial_text_is_removed() {
        let (rules, opts) = defaults();
        let f = facts("div", "sidebar-promo", "", "Great deal on replica shirts");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);

        let f = facts("div", "", "ad-slot-3", "Shop the collection");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);
    }

    #[test]
    fn plain_blocks_are_kept() {
        let (rules, opts) = defaults();
        let f = facts("p", "", "", "The final whistle blew at nine.");
        assert_eq!(classify(&f, &rules, &opts), Verdict::Keep);
    }

    #[test]
    fn large_editorial_blocks_override_ad_markers() {
        let (rules, opts) = defaults();
        // Grow an editorial block past the threshold in steps and check
        // the override holds at every size.
        let sentence = "The coach said the squad trained well and the team expects a hard match. ";
        for repeats in [8, 12, 20, 40] {
            let text = sentence.repeat(repeats);
            assert!(text.chars().count() > 500);
            let f = facts("aside", "ad sponsor banner", "ad-zone", &text);
            assert_eq!(
                classify(&f, &rules, &opts),
                Verdict::Keep,
                "override must hold at {} chars",
                text.chars().count()
            );
        }
    }

    #[test]
    fn paragraph_rich_blocks_override_ad_markers() {
        let (rules, opts) = defaults();
        // Commercial text plus an ad marker would normally remove this
        // block; the paragraph count alone must save it.
        let filler = "Fresh merchandise in the store, every deal listed below for supporters. ".repeat(10);
        let mut f = facts("div", "ad-container", "", &filler);
        f.paragraph_count = 4;
        assert_eq!(classify(&f, &rules, &opts), Verdict::Keep);

        // Same block with too few paragraphs goes back to being an ad.
        f.paragraph_count = 1;
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);
    }

    #[test]
    fn large_blocks_without_editorial_signals_can_still_be_removed() {
        let (rules, opts) = defaults();
        // Long but commercial: no editorial keyword, few paragraphs.
        let text = "Unmissable discount on hospitality packages, hurry. ".repeat(10);
        assert!(text.chars().count() > opts.large_block_len);
        let f = facts("div", "promo-box", "", &text);
        assert_eq!(classify(&f, &rules, &opts), Verdict::Remove);
    }

    #[test]
    fn facts_are_gathered_from_the_tree() {
        let doc = dom::parse(
            r#"<div id="zone" class="ad-unit"><p>one</p><p>two</p> spaced  text</div>"#,
        );
        let f = ElementFacts::from_selection(&doc.select("#zone"));

        assert_eq!(f.tag, "div");
        assert_eq!(f.class_attr, "ad-unit");
        assert_eq!(f.id_attr, "zone");
        assert_eq!(f.paragraph_count, 2);
        assert_eq!(f.text, "onetwo spaced text");
    }
}
