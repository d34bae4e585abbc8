//! Result ordering: coverage, then hits, then recency.

use super::common::{blog_corpus, make_corpus, run};
use scour::{compare_items, rank};
use std::cmp::Ordering;

fn ids(view: &scour::SearchView) -> Vec<usize> {
    view.items().iter().map(|item| item.id).collect()
}

#[test]
fn test_coverage_beats_hit_count() {
    let corpus = make_corpus(&[
        ("Repeated", "rust rust rust rust rust"),
        ("Mixed", "rust and wasm"),
    ]);
    let view = run(&corpus, "rust wasm", 1);

    assert_eq!(view.len(), 2);
    assert!(view.items()[0].markup.contains("Mixed"));
    assert_eq!(view.items()[0].included_count, 2);
    assert_eq!(view.items()[1].included_count, 1);
    assert_eq!(view.items()[1].hit_count, 5);
}

#[test]
fn test_hit_count_breaks_coverage_ties() {
    let corpus = make_corpus(&[("A", "rust"), ("B", "rust, rust"), ("C", "rust rust rust")]);
    let view = run(&corpus, "rust", 1);
    assert_eq!(ids(&view), vec![2, 1, 0]);
}

#[test]
fn test_later_documents_win_full_ties() {
    let corpus = make_corpus(&[("Same", "rust"), ("Same", "rust"), ("Same", "rust")]);
    let view = run(&corpus, "rust", 1);
    assert_eq!(ids(&view), vec![2, 1, 0]);
}

#[test]
fn test_results_are_sorted_by_comparator() {
    let corpus = blog_corpus();
    let view = run(&corpus, "rust wasm search", 1);
    assert!(view.len() >= 3);

    for pair in view.items().windows(2) {
        assert_ne!(
            compare_items(&pair[0], &pair[1]),
            Ordering::Greater,
            "{:?} ranked before {:?}",
            (pair[0].included_count, pair[0].hit_count, pair[0].id),
            (pair[1].included_count, pair[1].hit_count, pair[1].id)
        );
    }
}

#[test]
fn test_ranking_twice_changes_nothing() {
    let corpus = blog_corpus();
    let view = run(&corpus, "rust", 1);
    let mut items = view.items().to_vec();
    rank(&mut items);
    assert_eq!(items, view.items());
}
