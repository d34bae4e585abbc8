// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for raw query handling.
//!
//! Whatever lands in the search box (emoji, RTL text, null bytes, stray
//! angle brackets) must come back as a view: cleared, empty or ranked.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scour::testing::{make_corpus, make_options};
use scour::{compare_items, SearchView, Searcher};
use std::cmp::Ordering;
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static CORPUS: OnceLock<scour::Corpus> = OnceLock::new();
    let corpus = CORPUS.get_or_init(|| {
        make_corpus(&[
            ("Hello World", "this is a test about hello"),
            ("İstanbul notes", "Straße, café and naïve text with &amp; entities"),
            ("Vec<u8>", "A Vec&lt;u8&gt; holds bytes; wasm-bindgen glues them"),
            ("Empty", ""),
        ])
    });

    // Cap query length to avoid timeouts
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let query = query.as_str();

    for top_n in [-1, 0, 1] {
        let options = make_options(top_n);
        match Searcher::new(corpus, &options).search(query) {
            SearchView::Cleared => assert!(query.split(|c: char| c == '-' || c.is_whitespace()).all(str::is_empty)),
            SearchView::NoResults { stats, .. } => assert!(!stats.is_empty()),
            SearchView::Results { items, .. } => {
                assert!(items.len() <= corpus.len());
                for pair in items.windows(2) {
                    assert_eq!(compare_items(&pair[0], &pair[1]), Ordering::Less);
                }
            }
        }
    }
});
