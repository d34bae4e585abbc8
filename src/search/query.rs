// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query text to keywords.

use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::CorpusFormat;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid separator pattern"));

/// A query split into the keywords that are matched against the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The trimmed, lower-cased query, as shown back in the empty state.
    pub text: String,
    pub keywords: Vec<String>,
}

impl Query {
    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Trim, lower-case and split a raw query on runs of whitespace or `-`.
///
/// XML corpora keep `<` and `>` entity-encoded in their content, so the
/// query is encoded the same way before splitting.
pub fn parse_query(raw: &str, format: CorpusFormat) -> Query {
    let mut text = raw.trim().to_lowercase();
    if format == CorpusFormat::Xml {
        text = text.replace('<', "&lt;").replace('>', "&gt;");
    }

    let keywords = SEPARATORS
        .split(&text)
        .filter(|keyword| !keyword.is_empty())
        .map(String::from)
        .collect();

    Query { text, keywords }
}
