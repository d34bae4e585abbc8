// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt selection: which parts of a document to show for a query.
//!
//! The title is shown whole. The content is cut into windows around each
//! occurrence, each window is merged into a slice, and the densest slices win.
//! Rendering cost per document stays bounded by `top_n` no matter how many
//! times a keyword appears.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::matcher::{find_occurrences, MatchOptions};
use crate::slice::{merge_into_slice, Cursor};
use crate::types::{Document, Slice};
use crate::util::{chars_back, chars_forward};

/// Characters of context kept before an occurrence.
pub const CONTEXT_BEFORE: usize = 20;

/// Characters kept from an occurrence onward. Together with the context this
/// makes a 120 character excerpt, a bit more than the 80 character search box.
pub const CONTEXT_AFTER: usize = 100;

/// Everything a document contributes to one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Excerpts {
    /// One slice over the whole title, when the title matched.
    pub title: Option<Slice>,
    /// Retained content slices, best first.
    pub content: Vec<Slice>,
    /// Occurrences in title and content, before any overlap removal.
    pub hit_count: usize,
    /// Distinct keywords matched in title or content.
    pub included: BTreeSet<String>,
}

impl Excerpts {
    pub fn is_match(&self) -> bool {
        self.hit_count > 0
    }

    pub fn included_count(&self) -> usize {
        self.included.len()
    }
}

/// Order content slices: more distinct keywords, then more hits, then earlier.
pub fn compare_slices(a: &Slice, b: &Slice) -> Ordering {
    b.distinct
        .cmp(&a.distinct)
        .then_with(|| b.hit_count().cmp(&a.hit_count()))
        .then_with(|| a.start.cmp(&b.start))
}

/// Select the title slice and up to `top_n` content slices of `document`.
///
/// `top_n = None` keeps every candidate slice.
pub fn select_excerpts<S: AsRef<str>>(
    document: &Document,
    keywords: &[S],
    options: MatchOptions,
    top_n: Option<usize>,
) -> Excerpts {
    let title_matches = find_occurrences(keywords, &document.title, options);
    let content_matches = find_occurrences(keywords, &document.content, options);

    let hit_count = title_matches.len() + content_matches.len();
    if hit_count == 0 {
        return Excerpts::default();
    }

    let title = if title_matches.is_empty() {
        None
    } else {
        let mut cursor = Cursor::new(&title_matches.occurrences);
        Some(merge_into_slice(0, document.title.len(), &mut cursor))
    };

    let mut content = content_slices(&document.content, &content_matches.occurrences);
    content.sort_by(compare_slices);
    if let Some(limit) = top_n {
        content.truncate(limit);
    }

    let mut included = title_matches.included;
    included.extend(content_matches.included);

    Excerpts {
        title,
        content,
        hit_count,
        included,
    }
}

/// One candidate slice per occurrence not absorbed by an earlier window.
fn content_slices(content: &str, occurrences: &[crate::types::Occurrence]) -> Vec<Slice> {
    let mut cursor = Cursor::new(occurrences);
    let mut slices = Vec::new();

    while let Some(front) = cursor.peek() {
        let start = chars_back(content, front.position, CONTEXT_BEFORE);
        // A keyword longer than the window would otherwise never fit
        let end = chars_forward(content, front.position, CONTEXT_AFTER).max(front.end());
        slices.push(merge_into_slice(start, end, &mut cursor));
    }

    slices
}
