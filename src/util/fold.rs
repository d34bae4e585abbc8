// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding with an offset map back to the original text.
//!
//! Lower-casing is not length-preserving in UTF-8: `'İ'` (2 bytes) folds to
//! `"i\u{307}"` (3 bytes), `'K'` (Kelvin sign, 3 bytes) folds to `"k"` (1 byte).
//! Scanning happens on the folded copy, but highlights must land on the
//! original, so every folded byte records the original char span it came from.
//!
//! When folding preserves every char's byte length (all of ASCII and most
//! scripts) offsets are identical and no map is kept.

use std::borrow::Cow;

/// Fold a keyword the same way texts are folded.
///
/// Char-wise `to_lowercase`, deliberately not `str::to_lowercase`: the latter
/// special-cases a word-final sigma, which would make keyword and text fold
/// differently.
pub fn fold_keyword(keyword: &str) -> String {
    keyword.chars().flat_map(char::to_lowercase).collect()
}

/// A text prepared for case-insensitive scanning.
#[derive(Debug, Clone)]
pub struct FoldedText<'a> {
    folded: Cow<'a, str>,
    /// `spans[i]` is the original `(start, end)` of the char that produced
    /// folded byte `i`. `None` when offsets coincide.
    spans: Option<Vec<(usize, usize)>>,
}

impl<'a> FoldedText<'a> {
    /// Scan the text as-is.
    pub fn verbatim(text: &'a str) -> Self {
        FoldedText {
            folded: Cow::Borrowed(text),
            spans: None,
        }
    }

    /// Lower-case the text, keeping a map back to original offsets.
    pub fn lowercase(text: &'a str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut spans = Vec::with_capacity(text.len());
        let mut aligned = true;

        for (start, ch) in text.char_indices() {
            let end = start + ch.len_utf8();
            let before = folded.len();
            folded.extend(ch.to_lowercase());
            let written = folded.len() - before;
            aligned &= written == ch.len_utf8();
            spans.extend(std::iter::repeat((start, end)).take(written));
        }

        if aligned && folded == text {
            return FoldedText::verbatim(text);
        }

        FoldedText {
            folded: Cow::Owned(folded),
            spans: if aligned { None } else { Some(spans) },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a non-empty folded range `[start, end)` onto the original text.
    ///
    /// A range that starts or ends inside a multi-char expansion widens to the
    /// whole original char, so the result always sits on char boundaries.
    pub fn to_original(&self, start: usize, end: usize) -> (usize, usize) {
        debug_assert!(start < end, "folded range must be non-empty");
        match &self.spans {
            None => (start, end),
            Some(spans) => (spans[start].0, spans[end - 1].1),
        }
    }
}
