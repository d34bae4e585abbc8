//! Input generators shared by the property tests.

use proptest::prelude::*;

/// Short words from a small alphabet, so keywords actually hit.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{1,4}").unwrap()
}

/// Words with multi-byte and case-changing characters mixed in.
pub fn unicode_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "café".to_string(),
        "CAFÉ".to_string(),
        "naïve".to_string(),
        "İstanbul".to_string(),
        "straße".to_string(),
        "Σίσυφος".to_string(),
        "తెలుగు".to_string(),
        "K".to_string(),
        "ab".to_string(),
        "a".to_string(),
    ])
}

/// Text made of words separated by spaces or punctuation.
pub fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop_oneof![word(), unicode_word()], prop::sample::select(vec![" ", ", ", "-", ""])),
        0..24,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, sep)| format!("{}{}", word, sep))
            .collect()
    })
}

pub fn keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![word(), unicode_word(), Just(String::new())], 0..4)
}

/// `(title, content)` pairs for small corpora.
pub fn corpus_entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((text(), text()), 0..8)
}
