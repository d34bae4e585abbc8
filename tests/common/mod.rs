//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use regex::Regex;
use scour::{Corpus, CorpusFormat, Document, SearchView, Searcher};

// Re-export canonical test utilities from scour::testing
pub use scour::testing::{corpus_json, corpus_xml, make_corpus, make_doc, make_options};

static MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<mark class="search-keyword">(.*?)</mark>"#).unwrap());

// ============================================================================
// FIXTURES
// ============================================================================

/// A small blog, newest post last.
pub fn blog_docs() -> Vec<Document> {
    vec![
        Document::new(
            "Getting started with Rust",
            "<p>Rust is a systems language. Install it with rustup and run cargo new.</p>",
            "/posts/getting-started//",
        ),
        Document::new(
            "Async Rust in practice",
            "<p>Futures, executors and the <code>async</code> keyword. Tokio is the usual runtime.</p>",
            "/posts/async-rust/",
        ),
        Document::new(
            "Building for WebAssembly",
            "<p>wasm-bindgen glues Rust and JavaScript together; wasm-pack bundles it.</p>",
            "/posts/wasm/",
        ),
        Document::new("  ", "an untitled draft about rust", "/drafts/1/"),
        Document::new(
            "Notes on search",
            "<p>A client-side search over a static site: no server, no index, just text.</p>",
            "/posts/search/",
        ),
    ]
}

/// The blog corpus after loading: the untitled draft is gone.
pub fn blog_corpus() -> Corpus {
    Corpus::parse(&corpus_json(&blog_docs()), CorpusFormat::Json).unwrap()
}

// ============================================================================
// HELPERS
// ============================================================================

/// Run `query` against `corpus` with `top_n` excerpts per document.
pub fn run(corpus: &Corpus, query: &str, top_n: i64) -> SearchView {
    let options = make_options(top_n);
    Searcher::new(corpus, &options).search(query)
}

/// Texts wrapped in marks, in order of appearance.
pub fn marked(markup: &str) -> Vec<String> {
    MARK.captures_iter(markup).map(|c| c[1].to_string()).collect()
}

/// Number of excerpt paragraphs in an item's markup.
pub fn excerpt_count(markup: &str) -> usize {
    markup.matches("<p class=\"search-result\">").count()
}
