//! Declarative removal rules shared by the classifier and the cleaning
//! pipeline.
//!
//! The rule table replaces CSS-selector matching with explicit
//! `(match kind, pattern)` entries, so the decision logic stays
//! independent of any selector engine and can be tested in isolation.

/// How a rule inspects an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The pattern appears anywhere in the `class` attribute.
    ClassContains,
    /// The pattern appears anywhere in the `id` attribute.
    IdContains,
    /// The pattern equals the tag name.
    TagIs,
}

/// One structural ad marker: a match kind plus its pattern.
///
/// Markers deliberately over-match ("ad" is a substring of "header");
/// removal still requires a promotional text signal, and large editorial
/// blocks are protected by the size override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdRule {
    pub kind: MatchKind,
    pub pattern: String,
}

impl AdRule {
    #[must_use]
    pub fn class_contains(pattern: &str) -> Self {
        Self {
            kind: MatchKind::ClassContains,
            pattern: pattern.to_lowercase(),
        }
    }

    #[must_use]
    pub fn id_contains(pattern: &str) -> Self {
        Self {
            kind: MatchKind::IdContains,
            pattern: pattern.to_lowercase(),
        }
    }

    #[must_use]
    pub fn tag_is(pattern: &str) -> Self {
        Self {
            kind: MatchKind::TagIs,
            pattern: pattern.to_lowercase(),
        }
    }

    /// Evaluates this rule against one element.
    ///
    /// Class and id matching is ASCII case-insensitive substring
    /// containment; tag matching is an exact case-insensitive compare.
    #[must_use]
    pub fn matches(&self, tag: &str, class_attr: &str, id_attr: &str) -> bool {
        match self.kind {
            MatchKind::ClassContains => contains_ignore_ascii_case(class_attr, &self.pattern),
            MatchKind::IdContains => contains_ignore_ascii_case(id_attr, &self.pattern),
            MatchKind::TagIs => tag.eq_ignore_ascii_case(&self.pattern),
        }
    }
}

/// Substring search that ignores ASCII case without allocating.
fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// The complete rule table driving classification and cleaning.
///
/// A `RuleSet` is read-only once built. The same instance can be shared
/// across any number of extraction calls (and across threads).
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Tags detached unconditionally wherever they appear.
    pub always_remove_tags: Vec<String>,

    /// Page furniture tags detached during document-wide cleaning when
    /// they sit outside the article subtree.
    pub chrome_tags: Vec<String>,

    /// Structural ad markers, evaluated in order.
    pub ad_rules: Vec<AdRule>,

    /// Commercial words that confirm a structural ad marker.
    pub promo_vocabulary: Vec<String>,

    /// Words that mark a large block as editorial prose.
    pub editorial_keywords: Vec<String>,
}

/// Class/id substrings treated as structural ad markers.
const AD_MARKERS: &[&str] = &[
    "ad",
    "advert",
    "sponsor",
    "promo",
    "banner",
    "newsletter",
    "signup",
    "social",
    "popup",
    "modal",
];

/// Commercial vocabulary confirming an ad marker.
const PROMO_VOCABULARY: &[&str] = &[
    "buy",
    "shop",
    "subscribe",
    "sign up",
    "offer",
    "deal",
    "discount",
];

/// News-prose vocabulary recognized by the large-block override.
const EDITORIAL_KEYWORDS: &[&str] = &[
    "said",
    "according",
    "reported",
    "announced",
    "season",
    "game",
    "match",
    "team",
    "player",
    "coach",
    "league",
    "club",
    "score",
    "goal",
    "win",
    "review",
    "analysis",
    "statement",
];

impl Default for RuleSet {
    fn default() -> Self {
        let mut ad_rules = Vec::with_capacity(AD_MARKERS.len() * 2);
        for marker in AD_MARKERS {
            ad_rules.push(AdRule::class_contains(marker));
            ad_rules.push(AdRule::id_contains(marker));
        }

        Self {
            always_remove_tags: to_strings(&["script", "style", "noscript"]),
            chrome_tags: to_strings(&["nav", "header", "footer", "aside"]),
            ad_rules,
            promo_vocabulary: to_strings(PROMO_VOCABULARY),
            editorial_keywords: to_strings(EDITORIAL_KEYWORDS),
        }
    }
}

impl RuleSet {
    /// Returns `true` for tags that are never content (script, style).
    #[must_use]
    pub fn is_always_remove(&self, tag: &str) -> bool {
        self.always_remove_tags
            .iter()
            .any(|t| tag.eq_ignore_ascii_case(t))
    }

    /// Returns `true` for page-furniture tags (nav, header, footer, aside).
    #[must_use]
    pub fn is_chrome(&self, tag: &str) -> bool {
        self.chrome_tags.iter().any(|t| tag.eq_ignore_ascii_case(t))
    }

    /// First ad rule matching the element, in table order.
    #[must_use]
    pub fn matching_ad_rule(&self, tag: &str, class_attr: &str, id_attr: &str) -> Option<&AdRule> {
        self.ad_rules
            .iter()
            .find(|rule| rule.matches(tag, class_attr, id_attr))
    }

    /// Returns `true` if the element carries any structural ad marker.
    #[must_use]
    pub fn has_ad_marker(&self, tag: &str, class_attr: &str, id_attr: &str) -> bool {
        self.matching_ad_rule(tag, class_attr, id_attr).is_some()
    }

    /// Returns `true` if `text` contains commercial vocabulary.
    ///
    /// Containment is case-insensitive substring search, matching the
    /// loose matching used for class/id markers.
    #[must_use]
    pub fn has_promo_vocabulary(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.promo_vocabulary
            .iter()
            .any(|word| lowered.contains(word.as_str()))
    }

    /// Returns `true` if `text` contains at least one editorial keyword.
    #[must_use]
    pub fn has_editorial_keyword(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.editorial_keywords
            .iter()
            .any(|word| lowered.contains(word.as_str()))
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_lowercase()).collect()
}
