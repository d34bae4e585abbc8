//! Inputs at the edges: empty bodies, odd keywords, odd text.

use super::common::{make_corpus, marked, run};
use scour::{Corpus, CorpusFormat, SearchConfig, SearchOptions, SearchView, Searcher};

#[test]
fn test_document_without_content() {
    let corpus = make_corpus(&[("Rust", "")]);
    let view = run(&corpus, "rust", 1);
    assert_eq!(view.len(), 1);
    assert_eq!(view.items()[0].hit_count, 1);
}

#[test]
fn test_empty_corpus() {
    let corpus = Corpus::default();
    assert!(matches!(run(&corpus, "rust", 1), SearchView::NoResults { .. }));
}

#[test]
fn test_hyphenated_query_splits() {
    let corpus = make_corpus(&[("Tools", "wasm then bindgen")]);
    let view = run(&corpus, "wasm-bindgen", 1);
    assert_eq!(view.items()[0].included_count, 2);
}

#[test]
fn test_keyword_longer_than_window() {
    let word = "x".repeat(150);
    let content = format!("start {} end", word);
    let corpus = make_corpus(&[("Long", content.as_str())]);
    let view = run(&corpus, &word, -1);
    assert_eq!(view.len(), 1);
    assert_eq!(marked(&view.items()[0].markup), vec![word]);
}

#[test]
fn test_repeated_keyword_counts_once_for_coverage() {
    let corpus = make_corpus(&[("Notes", "rust")]);
    let view = run(&corpus, "rust rust", 1);
    assert_eq!(view.items()[0].included_count, 1);
}

#[test]
fn test_non_ascii_case_folding() {
    let corpus = make_corpus(&[("ÉCOLE Notes", "Straße und STRASSE")]);
    let view = run(&corpus, "école straße", 1);
    assert_eq!(view.len(), 1);
    assert_eq!(marked(&view.items()[0].markup), vec!["ÉCOLE", "Straße"]);
}

#[test]
fn test_template_value_is_literal() {
    let corpus = make_corpus(&[("Rust", "")]);
    let view = run(&corpus, "$& $1", 1);
    assert_eq!(
        view.stats_html(),
        "<div class=\"search-result-stats\">No results found for: $&amp; $1</div>"
    );
}

#[test]
fn test_xml_queries_match_encoded_brackets() {
    let body = r#"<search><entry>
        <title>Byte buffers</title>
        <content><![CDATA[<p>A Vec&lt;u8&gt; holds bytes.</p>]]></content>
        <url>/bytes/</url>
    </entry></search>"#;
    let corpus = Corpus::parse(body, CorpusFormat::Xml).unwrap();
    let options = SearchOptions::from_config(&SearchConfig::new("/search.xml")).unwrap();

    let view = Searcher::new(&corpus, &options).search("Vec<u8>");
    assert_eq!(view.len(), 1);
    // JSON corpora match the raw brackets instead
    assert!(run(&corpus, "Vec<u8>", 1).is_empty());
}

#[test]
fn test_unescape_matches_encoded_ampersand() {
    let corpus = make_corpus(&[("Notes", "Tom &amp; Jerry")]);
    let mut config = SearchConfig::new("/search.json");
    config.unescape = true;
    let options = SearchOptions::from_config(&config).unwrap();

    // The whole entity is marked and written back as-is
    let view = Searcher::new(&corpus, &options).search("&");
    assert_eq!(marked(&view.items()[0].markup), vec!["&amp;"]);
    assert!(view.items()[0]
        .markup
        .contains("Tom <mark class=\"search-keyword\">&amp;</mark> Jerry"));

    // Without it only the bare `&` of the entity matches
    let view = run(&corpus, "&", 1);
    assert_eq!(marked(&view.items()[0].markup), vec!["&amp;"]);
    assert!(view.items()[0]
        .markup
        .contains("Tom <mark class=\"search-keyword\">&amp;</mark>amp; Jerry"));
}

#[test]
fn test_xml_entities_render_once() {
    let body = r#"<search><entry>
        <title>Byte buffers</title>
        <content><![CDATA[<p>Use Vec&lt;u8&gt; for bytes &amp; more</p>]]></content>
        <url>/bytes/</url>
    </entry></search>"#;
    let corpus = Corpus::parse(body, CorpusFormat::Xml).unwrap();
    let mut config = SearchConfig::new("/search.xml");
    config.unescape = true;
    config.origin = "https://blog.example/".to_string();
    let options = SearchOptions::from_config(&config).unwrap();

    let view = Searcher::new(&corpus, &options).search("bytes &");
    assert_eq!(view.len(), 1);
    let markup = &view.items()[0].markup;
    assert!(
        markup.contains(
            "Vec&lt;u8&gt; for <mark class=\"search-keyword\">bytes</mark> \
             <mark class=\"search-keyword\">&amp;</mark> more...</p>"
        ),
        "{}",
        markup
    );
    assert!(!markup.contains("&amp;lt;"));
    assert!(!markup.contains("&amp;amp;"));

    // Bracket queries match the encoded form and render it unchanged
    let mut config = SearchConfig::new("/search.xml");
    config.origin = "https://blog.example/".to_string();
    let options = SearchOptions::from_config(&config).unwrap();
    let view = Searcher::new(&corpus, &options).search("Vec<u8>");
    assert_eq!(marked(&view.items()[0].markup), vec!["Vec&lt;u8&gt;"]);
}
