//! Two-pass cleaning pipeline.
//!
//! `clean_document` sweeps the whole page: scripts and styles, page
//! chrome, ad candidates, promotional blocks, empty shells.
//! `clean_node` repeats the content-sensitive sweeps inside the located
//! content area. Removal is always two-phase: a mark pass collects
//! nodes from a snapshot, a sweep pass detaches them in reverse
//! document order, so the traversal never races its own mutations.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::classify::{self, ElementFacts, Verdict};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns;
use crate::rules::RuleSet;

/// Tags that may be left as empty shells after structural removals.
const EMPTY_SHELL_TAGS: &[&str] = &["p", "div", "span"];

/// Block-level tags a promotional text match climbs to.
const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "li",
    "section",
    "aside",
    "blockquote",
    "td",
    "figure",
];

/// Ancestors marking a node as inside confirmed article content.
const CONTENT_ANCESTOR_TAGS: &[&str] = &["article", "main"];

/// Clean a full document in place.
///
/// Returns the number of detached subtrees. Running it again on its own
/// output detaches nothing.
pub fn clean_document(document: &Document, rules: &RuleSet, opts: &Options) -> usize {
    let root = document.select("html").first();
    if !root.exists() {
        return 0;
    }

    let mut removed = sweep_always_removed(&root, rules);
    removed += sweep_chrome(&root, rules);
    removed += sweep_ad_candidates(&root, rules, opts);
    removed += sweep_promotional_blocks(&root, rules, opts);
    removed += sweep_empty_shells(&root);
    removed
}

/// Clean one subtree in place.
///
/// Same sweeps as [`clean_document`] minus the chrome pass: inside a
/// confirmed content area, `aside`-tagged wrappers may hold bylines or
/// embedded editorial blocks and are judged by the classifier instead.
pub fn clean_node(area: &Selection, rules: &RuleSet, opts: &Options) -> usize {
    let mut removed = sweep_always_removed(area, rules);
    removed += sweep_ad_candidates(area, rules, opts);
    removed += sweep_promotional_blocks(area, rules, opts);
    removed += sweep_empty_shells(area);
    removed
}

/// Detach marked nodes, children before parents.
fn detach(marked: &[NodeRef<'_>]) -> usize {
    for node in marked.iter().rev() {
        dom::remove(&Selection::from(*node));
    }
    marked.len()
}

/// Step 1: scripts, styles and noscript blocks go unconditionally.
fn sweep_always_removed(scope: &Selection, rules: &RuleSet) -> usize {
    let snapshot = scope.select("*").nodes().to_vec();

    let mut marked = Vec::new();
    for node in &snapshot {
        let sel = Selection::from(*node);
        let tag = dom::tag_name(&sel).unwrap_or_default();
        if rules.is_always_remove(&tag) {
            marked.push(*node);
        }
    }
    detach(&marked)
}

/// Step 2: page furniture, unless it sits inside an article container.
///
/// The carve-out keeps byline and date wrappers that publishers nest in
/// `aside` tags within the article itself; those are judged by the
/// classifier in later sweeps instead of being torn out as chrome.
fn sweep_chrome(scope: &Selection, rules: &RuleSet) -> usize {
    let snapshot = scope.select("*").nodes().to_vec();

    let mut marked = Vec::new();
    for node in &snapshot {
        let sel = Selection::from(*node);
        let tag = dom::tag_name(&sel).unwrap_or_default();
        if rules.is_chrome(&tag) && !dom::has_ancestor_tag(&sel, CONTENT_ANCESTOR_TAGS) {
            marked.push(*node);
        }
    }
    detach(&marked)
}

/// Step 3: classify every element carrying a structural ad marker.
fn sweep_ad_candidates(scope: &Selection, rules: &RuleSet, opts: &Options) -> usize {
    let snapshot = scope.select("*").nodes().to_vec();

    let mut marked = Vec::new();
    for node in &snapshot {
        let sel = Selection::from(*node);
        let facts = ElementFacts::from_selection(&sel);
        if !rules.has_ad_marker(&facts.tag, &facts.class_attr, &facts.id_attr) {
            continue;
        }
        if classify::classify(&facts, rules, opts) == Verdict::Remove {
            if cfg!(debug_assertions) {
                eprintln!(
                    "DEBUG: removing ad candidate <{} class=\"{}\" id=\"{}\">",
                    facts.tag, facts.class_attr, facts.id_attr
                );
            }
            marked.push(*node);
        }
    }
    detach(&marked)
}

/// Step 4: find promotional phrases and judge their nearest block.
///
/// Classifying the block (not the matching element) keeps editorial
/// paragraphs that merely quote promotional language: the block's full
/// text puts the match outside the promotional scope length.
fn sweep_promotional_blocks(scope: &Selection, rules: &RuleSet, opts: &Options) -> usize {
    let snapshot = scope.select("*").nodes().to_vec();

    let mut marked = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    for node in &snapshot {
        let sel = Selection::from(*node);
        let text = dom::normalized_text(&sel);
        if text.is_empty() || !patterns::is_promotional(&text) {
            continue;
        }

        let Some(block) = nearest_block(&sel) else {
            continue;
        };
        let Some(block_node) = block.nodes().first().copied() else {
            continue;
        };
        if !seen.insert(block_node.id) {
            continue;
        }

        let facts = ElementFacts::from_selection(&block);
        if classify::classify(&facts, rules, opts) == Verdict::Remove {
            if cfg!(debug_assertions) {
                eprintln!("DEBUG: removing promotional block <{}>", facts.tag);
            }
            marked.push(block_node);
        }
    }
    detach(&marked)
}

/// Step 5: drop paragraph/div/span shells with no text and no media.
///
/// Reverse document order visits children before parents, so a chain of
/// nested shells collapses in a single pass.
fn sweep_empty_shells(scope: &Selection) -> usize {
    let snapshot = scope.select("*").nodes().to_vec();

    let mut removed = 0;
    for node in snapshot.into_iter().rev() {
        let sel = Selection::from(node);
        let tag = dom::tag_name(&sel).unwrap_or_default();
        if !EMPTY_SHELL_TAGS.contains(&tag.as_str()) {
            continue;
        }
        if dom::text_len(&sel) == 0 && !dom::has_media_descendant(&sel) {
            dom::remove(&sel);
            removed += 1;
        }
    }
    removed
}

/// The element itself when block-level, otherwise its closest
/// block-level ancestor.
fn nearest_block<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    let tag = dom::tag_name(sel).unwrap_or_default();
    if BLOCK_TAGS.contains(&tag.as_str()) {
        return Some(sel.clone());
    }

    let mut current = dom::parent(sel);
    while current.exists() {
        let tag = dom::tag_name(&current).unwrap_or_default();
        if BLOCK_TAGS.contains(&tag.as_str()) {
            return Some(current);
        }
        current = dom::parent(&current);
    }
    None
}
