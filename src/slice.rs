// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy merging of sorted occurrences into a highlightable slice.
//!
//! This is the one primitive shared by excerpt scoring and live page
//! highlighting, so both agree on what gets marked.
//!
//! The occurrence list is never modified. A [`Cursor`] walks it instead, and
//! each merge advances the cursor past everything it consumed, including the
//! occurrences it dropped for overlapping an accepted hit.

use std::collections::BTreeSet;

use crate::contracts::check_slice_well_formed;
use crate::types::{Hit, Occurrence, Slice};

/// A read position in an immutable, sorted occurrence list.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    occurrences: &'a [Occurrence],
    next: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(occurrences: &'a [Occurrence]) -> Self {
        Cursor {
            occurrences,
            next: 0,
        }
    }

    /// The first occurrence not yet consumed.
    pub fn peek(&self) -> Option<&'a Occurrence> {
        self.occurrences.get(self.next)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.occurrences.len()
    }

    /// Number of occurrences not yet consumed.
    pub fn remaining(&self) -> usize {
        self.occurrences.len().saturating_sub(self.next)
    }
}

/// Merge occurrences from the cursor into a slice over `[start, end)`.
///
/// Takes the front occurrence while it ends at or before `end`, records it as
/// a hit, then skips every following occurrence that starts before the hit
/// ends. Stops at the first occurrence that does not fit, leaving it for the
/// next call.
///
/// The caller is expected to pass a window whose `start` is at or before the
/// cursor's front position.
///
/// # Example
///
/// ```
/// use scour::{find_occurrences, merge_into_slice, Cursor, MatchOptions};
///
/// let text = "one two one";
/// let matches = find_occurrences(&["one", "two"], text, MatchOptions::default());
/// let mut cursor = Cursor::new(&matches.occurrences);
/// let slice = merge_into_slice(0, text.len(), &mut cursor);
///
/// assert_eq!(slice.hits.len(), 3);
/// assert_eq!(slice.distinct, 2);
/// assert!(cursor.is_exhausted());
/// ```
pub fn merge_into_slice(start: usize, end: usize, cursor: &mut Cursor<'_>) -> Slice {
    let mut hits = Vec::new();
    let mut words: BTreeSet<&str> = BTreeSet::new();

    while let Some(occurrence) = cursor.peek() {
        if occurrence.end() > end {
            break;
        }

        words.insert(occurrence.word.as_str());
        hits.push(Hit {
            position: occurrence.position,
            length: occurrence.len,
        });
        let hit_end = occurrence.end();
        cursor.next += 1;

        // Drop everything overlapping the hit just accepted
        while cursor
            .peek()
            .is_some_and(|overlapping| overlapping.position < hit_end)
        {
            cursor.next += 1;
        }
    }

    let slice = Slice {
        start,
        end,
        hits,
        distinct: words.len(),
    };
    check_slice_well_formed(&slice);
    slice
}
