// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search pass.
//!
//! Documents come out of the corpus loader, occurrences out of the matcher,
//! slices out of the merger. Everything except `Document` is transient: it is
//! recomputed per query and thrown away once the markup is rendered.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Occurrence**: `position + len <= text.len()`, both on char boundaries of
//!   the *original* text. The case-folded copy used for scanning never leaks out.
//!
//! - **Slice**: hits strictly increasing, pairwise non-overlapping, and every
//!   hit satisfies `start <= position` and `position + length <= end`.
//!
//! - **Fragment list**: concatenating the fragment texts yields the input text.
//!
//! All offsets are byte offsets into UTF-8 strings. Window sizes are counted in
//! characters and converted at the edges (see `util::text`).

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One searchable article.
///
/// Built by the corpus loader and never mutated afterwards. `content` has its
/// HTML tags stripped; `url` is percent-decoded with duplicate slashes collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub url: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>, url: impl Into<String>) -> Self {
        Document {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// MATCH TYPES
// =============================================================================

/// A keyword match at a specific offset of a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    /// Byte offset into the original text.
    pub position: usize,
    /// Byte length of the matched span in the original text.
    pub len: usize,
    /// The normalized keyword that produced this match.
    pub word: String,
}

impl Occurrence {
    /// First byte after the matched span.
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.len
    }
}

/// A span to highlight inside a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub position: usize,
    pub length: usize,
}

impl Hit {
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

/// A bounded text window plus the non-overlapping hits to highlight in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub start: usize,
    pub end: usize,
    pub hits: Vec<Hit>,
    /// Number of distinct keywords among `hits`.
    pub distinct: usize,
}

impl Slice {
    /// A slice with no hits.
    pub fn empty(start: usize, end: usize) -> Self {
        Slice {
            start,
            end,
            hits: Vec::new(),
            distinct: 0,
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One rendered, rankable search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub markup: String,
    pub hit_count: usize,
    pub included_count: usize,
    /// Insertion order among the matching documents of one query.
    pub id: usize,
}

/// Piece of a text node after live highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum Fragment {
    Plain(String),
    Marked(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(text) | Fragment::Marked(text) => text,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Fragment::Marked(_))
    }
}
