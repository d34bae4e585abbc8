//! End-to-end scenarios over tiny corpora.

use super::common::{excerpt_count, make_corpus, marked, run};
use scour::SearchView;

fn lorem() -> String {
    " lorem".repeat(30)
}

#[test]
fn test_title_and_content_hit() {
    let corpus = make_corpus(&[("Hello World", "this is a test about hello")]);
    let view = run(&corpus, "hello", 1);

    assert_eq!(view.len(), 1);
    let item = &view.items()[0];
    assert_eq!(item.hit_count, 2);
    assert_eq!(item.included_count, 1);
    assert_eq!(marked(&item.markup), vec!["Hello", "hello"]);
    assert!(item
        .markup
        .contains("<span class=\"search-result-title\"><mark class=\"search-keyword\">Hello</mark> World</span>"));
}

#[test]
fn test_coverage_spans_title_and_content() {
    let corpus = make_corpus(&[("Tokio internals", "how the scheduler works")]);
    let view = run(&corpus, "tokio scheduler", 1);

    assert_eq!(view.len(), 1);
    assert_eq!(view.items()[0].included_count, 2);
    assert_eq!(view.items()[0].hit_count, 2);
}

#[test]
fn test_blank_query_clears_everything() {
    let corpus = make_corpus(&[("Hello World", "this is a test about hello")]);
    for query in ["", "   ", "\t\n", " - "] {
        let view = run(&corpus, query, 1);
        assert_eq!(view, SearchView::Cleared, "query {:?}", query);
        assert!(view.results_html().is_empty());
        assert!(view.stats_html().is_empty());
    }
}

#[test]
fn test_no_match_renders_empty_state() {
    let corpus = make_corpus(&[("Hello World", "this is a test about hello")]);
    let view = run(&corpus, "  Kubernetes ", 1);

    match &view {
        SearchView::NoResults { query, stats } => {
            assert_eq!(query, "kubernetes");
            assert_eq!(
                stats,
                "<div class=\"search-result-stats\">No results found for: kubernetes</div>"
            );
        }
        other => panic!("expected the empty state, got {:?}", other),
    }
    assert!(view.results_html().is_empty());
}

#[test]
fn test_top_one_keeps_densest_excerpt() {
    let content = format!("alpha{f}beta and alpha{f}alpha", f = lorem());
    let corpus = make_corpus(&[("Notes", content.as_str())]);
    let view = run(&corpus, "alpha beta", 1);

    let item = &view.items()[0];
    assert_eq!(excerpt_count(&item.markup), 1);
    assert_eq!(marked(&item.markup), vec!["beta", "alpha"]);
    assert_eq!(item.hit_count, 4);
    assert_eq!(item.included_count, 2);
}

#[test]
fn test_top_one_tie_goes_to_earliest_excerpt() {
    let content = format!("first alpha{f} second alpha{f} third alpha", f = lorem());
    let corpus = make_corpus(&[("Notes", content.as_str())]);
    let view = run(&corpus, "alpha", 1);

    let markup = &view.items()[0].markup;
    assert_eq!(excerpt_count(markup), 1);
    assert!(markup.contains("<p class=\"search-result\">first <mark class=\"search-keyword\">alpha</mark>"));
}

#[test]
fn test_stats_count_results() {
    let corpus = make_corpus(&[("one rust", ""), ("two", "rust"), ("three", "go")]);
    let view = run(&corpus, "rust", 1);
    assert_eq!(
        view.stats_html(),
        "<hr><div class=\"search-result-stats\">2 results found</div>"
    );
    assert!(view.results_html().starts_with("<div class=\"search-result-list\"><div class=\"local-search-hit-item\">"));
    assert!(view.results_html().ends_with("</a></div></div>"));
}
