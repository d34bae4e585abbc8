// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::search::SearchOptions;
use crate::types::Document;

/// Create a document whose url is derived from its id.
pub fn make_doc(id: usize, title: &str, content: &str) -> Document {
    Document::new(title, content, format!("/posts/{}/", id))
}

/// A corpus of `(title, content)` pairs, urls numbered from zero.
pub fn make_corpus(entries: &[(&str, &str)]) -> Corpus {
    Corpus::new(
        entries
            .iter()
            .enumerate()
            .map(|(id, (title, content))| make_doc(id, title, content))
            .collect(),
    )
}

/// Search options for a JSON corpus served from `https://blog.example/`.
pub fn make_options(top_n: i64) -> SearchOptions {
    let mut config = SearchConfig::new("/search.json");
    config.top_n_per_article = top_n;
    config.origin = "https://blog.example/".to_string();
    // The config above is always valid
    match SearchOptions::from_config(&config) {
        Ok(options) => options,
        Err(err) => unreachable!("test config rejected: {}", err),
    }
}

/// Serialize documents as the JSON corpus format.
pub fn corpus_json(docs: &[Document]) -> String {
    serde_json::to_string(docs).unwrap_or_else(|_| "[]".to_string())
}

/// Serialize documents as an XML feed of `<entry>` elements.
pub fn corpus_xml(docs: &[Document]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<search>\n");
    for doc in docs {
        out.push_str("  <entry>\n");
        out.push_str(&format!("    <title>{}</title>\n", html_escape::encode_text(&doc.title)));
        out.push_str(&format!(
            "    <content type=\"html\"><![CDATA[{}]]></content>\n",
            doc.content
        ));
        out.push_str(&format!("    <url>{}</url>\n", html_escape::encode_text(&doc.url)));
        out.push_str("  </entry>\n");
    }
    out.push_str("</search>\n");
    out
}
