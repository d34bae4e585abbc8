// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword matching: every occurrence of every keyword in a text.
//!
//! Plain substring search, one keyword at a time, over a case-folded copy of
//! the text. There is no index: the corpus is small and the scan is redone on
//! every query.
//!
//! Two overlap rules, and they are different on purpose:
//!
//! - a keyword never overlaps *itself*: after a hit at `p` the scan resumes at
//!   `p + len`, so `"aa"` in `"aaaa"` matches twice, not three times;
//! - different keywords may overlap freely. Sorting puts the longer match
//!   first at a tied position, and the slice merger keeps whichever comes first.

use std::collections::BTreeSet;

use crate::contracts::check_occurrences_sorted;
use crate::types::Occurrence;
use crate::util::{fold_keyword, FoldedText};

/// How keywords are compared against text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare bytes exactly instead of lower-casing both sides.
    pub case_sensitive: bool,
    /// Convert each keyword to its HTML text form (`&` -> `&amp;` etc.)
    /// before matching, so it lines up with entity-encoded corpus text.
    pub unescape: bool,
}

impl MatchOptions {
    pub fn with_unescape(unescape: bool) -> Self {
        MatchOptions {
            unescape,
            ..Self::default()
        }
    }
}

/// Result of one matching pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    /// Sorted by position ascending, then length descending, then keyword order.
    pub occurrences: Vec<Occurrence>,
    /// Normalized keywords that matched at least once.
    pub included: BTreeSet<String>,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }
}

/// The form a keyword is matched in.
pub fn normalize_keyword(keyword: &str, options: MatchOptions) -> String {
    let keyword = if options.unescape {
        html_escape::encode_text(keyword)
    } else {
        keyword.into()
    };
    if options.case_sensitive {
        keyword.into_owned()
    } else {
        fold_keyword(&keyword)
    }
}

/// Find every occurrence of every keyword in `text`.
///
/// Empty keywords are skipped. Positions refer to `text` itself, never to the
/// folded copy, so `&text[o.position..o.end()]` is always the matched span.
///
/// # Example
///
/// ```
/// use scour::{find_occurrences, MatchOptions};
///
/// let matches = find_occurrences(&["hello"], "Hello, hello", MatchOptions::default());
/// let positions: Vec<usize> = matches.occurrences.iter().map(|o| o.position).collect();
/// assert_eq!(positions, vec![0, 7]);
/// assert!(matches.included.contains("hello"));
/// ```
pub fn find_occurrences<S: AsRef<str>>(keywords: &[S], text: &str, options: MatchOptions) -> Matches {
    let haystack = if options.case_sensitive {
        FoldedText::verbatim(text)
    } else {
        FoldedText::lowercase(text)
    };
    let folded = haystack.as_str();

    let mut tagged: Vec<(usize, Occurrence)> = Vec::new();
    let mut included = BTreeSet::new();

    for (order, keyword) in keywords.iter().enumerate() {
        let word = normalize_keyword(keyword.as_ref(), options);
        if word.is_empty() {
            continue;
        }

        let mut from = 0;
        let mut last_end = 0;
        while let Some(found) = folded[from..].find(word.as_str()) {
            let folded_start = from + found;
            let folded_end = folded_start + word.len();
            let (position, end) = haystack.to_original(folded_start, folded_end);

            // Two folded hits can widen onto the same original char.
            if position >= last_end {
                tagged.push((
                    order,
                    Occurrence {
                        position,
                        len: end - position,
                        word: word.clone(),
                    },
                ));
                included.insert(word.clone());
                last_end = end;
            }
            from = folded_end;
        }
    }

    tagged.sort_by(|(order_a, a), (order_b, b)| {
        a.position
            .cmp(&b.position)
            .then_with(|| b.len.cmp(&a.len))
            .then_with(|| order_a.cmp(order_b))
    });

    let occurrences: Vec<Occurrence> = tagged.into_iter().map(|(_, o)| o).collect();
    check_occurrences_sorted(&occurrences);

    Matches {
        occurrences,
        included,
    }
}
