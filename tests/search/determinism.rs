//! Identical inputs give identical output, whatever the corpus format.

use super::common::{blog_corpus, blog_docs, corpus_json, corpus_xml, run};
use scour::{Corpus, CorpusFormat};

#[test]
fn test_repeated_queries_are_identical() {
    let corpus = blog_corpus();
    for query in ["rust", "wasm rust", "search static site", "nothing-here"] {
        let first = run(&corpus, query, 2);
        for _ in 0..5 {
            assert_eq!(run(&corpus, query, 2), first, "query {:?}", query);
        }
    }
}

#[test]
fn test_json_and_xml_corpora_search_alike() {
    let docs = blog_docs();
    let json = Corpus::parse(&corpus_json(&docs), CorpusFormat::Json).unwrap();
    let xml = Corpus::parse(&corpus_xml(&docs), CorpusFormat::Xml).unwrap();
    assert_eq!(json, xml);

    for query in ["rust", "tokio async", "wasm-bindgen"] {
        assert_eq!(run(&json, query, 1), run(&xml, query, 1), "query {:?}", query);
    }
}

#[test]
fn test_query_case_does_not_matter() {
    let corpus = blog_corpus();
    assert_eq!(run(&corpus, "RUST", 1), run(&corpus, "rust", 1));
}
