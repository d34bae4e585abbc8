// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Live highlighting of keywords inside an already-rendered page.
//!
//! A result link carries its keywords in the `highlight` query parameter.
//! On the destination page every text node of the content root is matched
//! with the same matcher and merger the result list uses, and matching nodes
//! are split into plain and marked fragments.
//!
//! Deciding what to mark ([`mark_text`]) is pure. Inserting the marks is the
//! job of a [`TextTree`].

pub mod tree;

pub use tree::{MemoryTree, NodeId, ParentInfo, TextTree};

use std::collections::BTreeSet;

use url::Url;

use crate::config::DEFAULT_ORIGIN;
use crate::contracts::check_fragments_round_trip;
use crate::matcher::{find_occurrences, MatchOptions};
use crate::render::{slice_fragments, HIGHLIGHT_PARAM};
use crate::slice::{merge_into_slice, Cursor};
use crate::types::Fragment;

/// Parents whose text is never highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    tags: BTreeSet<String>,
    classes: BTreeSet<String>,
}

impl Default for ExclusionSet {
    /// Form controls and diagram blocks.
    fn default() -> Self {
        ExclusionSet::empty()
            .with_tag("button")
            .with_tag("select")
            .with_tag("textarea")
            .with_class("mermaid")
    }
}

impl ExclusionSet {
    /// Excludes nothing.
    pub fn empty() -> Self {
        ExclusionSet {
            tags: BTreeSet::new(),
            classes: BTreeSet::new(),
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_ascii_lowercase());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn excludes(&self, parent: &ParentInfo) -> bool {
        self.tags.contains(&parent.tag) || self.classes.iter().any(|class| parent.has_class(class))
    }
}

/// Keywords carried by a navigation url, split on single spaces.
///
/// Accepts absolute urls and bare paths such as `/post/?highlight=a+b`.
/// Returns nothing when the parameter is absent.
pub fn keywords_from_url(url: &str) -> Vec<String> {
    let parsed = Url::parse(url).or_else(|_| Url::parse(DEFAULT_ORIGIN).and_then(|base| base.join(url)));
    let Ok(parsed) = parsed else {
        log::debug!("cannot read keywords from {:?}", url);
        return Vec::new();
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == HIGHLIGHT_PARAM)
        .map(|(_, value)| {
            value
                .split(' ')
                .filter(|keyword| !keyword.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Split `text` into plain and marked fragments, or `None` if nothing matches.
///
/// All occurrences are merged into one slice spanning the whole text, so
/// overlapping matches collapse exactly as they do in result excerpts.
/// Empty plain fragments are left out.
pub fn mark_text<S: AsRef<str>>(keywords: &[S], text: &str, options: MatchOptions) -> Option<Vec<Fragment>> {
    let matches = find_occurrences(keywords, text, options);
    if matches.is_empty() {
        return None;
    }

    let mut cursor = Cursor::new(&matches.occurrences);
    let slice = merge_into_slice(0, text.len(), &mut cursor);

    let fragments = slice_fragments(text, &slice);
    check_fragments_round_trip(text, &fragments);
    Some(fragments)
}

/// Mark `keywords` in every eligible text node of `tree`.
///
/// Returns the number of marks inserted.
pub fn highlight<T, S>(
    tree: &mut T,
    keywords: &[S],
    options: MatchOptions,
    exclusions: &ExclusionSet,
) -> Result<usize, T::Error>
where
    T: TextTree,
    S: AsRef<str>,
{
    if keywords.is_empty() {
        return Ok(0);
    }

    let mut marks = 0;
    for node in tree.text_nodes() {
        if tree.parent(&node).is_some_and(|parent| exclusions.excludes(&parent)) {
            continue;
        }
        let text = tree.text(&node);
        if let Some(fragments) = mark_text(keywords, &text, options) {
            marks += fragments.iter().filter(|f| f.is_marked()).count();
            tree.splice(&node, &fragments)?;
        }
    }

    log::debug!("highlighted {} spans for {} keywords", marks, keywords.len());
    Ok(marks)
}

/// Highlight with the keywords of a navigation url; a no-op without them.
pub fn highlight_from_url<T: TextTree>(
    tree: &mut T,
    url: &str,
    options: MatchOptions,
    exclusions: &ExclusionSet,
) -> Result<usize, T::Error> {
    let keywords = keywords_from_url(url);
    highlight(tree, &keywords, options, exclusions)
}
