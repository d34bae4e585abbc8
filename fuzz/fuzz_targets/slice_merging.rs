// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matching, slice merging and fragment splitting.
//!
//! Arbitrary text and keywords, including invalid char boundaries after
//! case folding (`İ`, `ẞ`), must never panic and never produce a slice whose
//! hits leave the text or overlap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scour::contracts::{check_occurrences_sorted, check_slice_well_formed};
use scour::render::slice_fragments;
use scour::{find_occurrences, merge_into_slice, Cursor, Fragment, MatchOptions};

#[derive(Debug, Arbitrary)]
struct MergeInput {
    text: String,
    keywords: Vec<String>,
    case_sensitive: bool,
    unescape: bool,
    window_start: u16,
    window_len: u16,
}

fuzz_target!(|input: MergeInput| {
    if input.text.len() > 4096 || input.keywords.len() > 8 {
        return;
    }
    let options = MatchOptions {
        case_sensitive: input.case_sensitive,
        unescape: input.unescape,
    };

    let matches = find_occurrences(&input.keywords, &input.text, options);
    check_occurrences_sorted(&matches.occurrences);
    for occurrence in &matches.occurrences {
        assert!(occurrence.end() <= input.text.len());
        assert!(input.text.is_char_boundary(occurrence.position));
        assert!(input.text.is_char_boundary(occurrence.end()));
    }

    // Whole text: every byte is covered exactly once by the fragments
    let mut cursor = Cursor::new(&matches.occurrences);
    let slice = merge_into_slice(0, input.text.len(), &mut cursor);
    check_slice_well_formed(&slice);
    let fragments = slice_fragments(&input.text, &slice);
    let joined: String = fragments.iter().map(Fragment::text).collect();
    assert_eq!(joined, input.text);

    // Arbitrary window: the cursor stops at the first occurrence past it
    let start = usize::from(input.window_start).min(input.text.len());
    let end = start
        .saturating_add(usize::from(input.window_len))
        .min(input.text.len());
    let mut cursor = Cursor::new(&matches.occurrences);
    let slice = merge_into_slice(start, end, &mut cursor);
    check_slice_well_formed(&slice);
    for hit in &slice.hits {
        assert!(hit.position >= start && hit.end() <= end);
    }
});
