//! Ranking and determinism over random corpora.

use super::common::{make_corpus, make_options};
use super::strategies::{corpus_entries, keywords};
use proptest::prelude::*;
use scour::{compare_items, find_occurrences, rank, MatchOptions, Searcher};
use std::cmp::Ordering;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same corpus, same keywords, same items in the same order.
    #[test]
    fn prop_search_is_deterministic(entries in corpus_entries(), keywords in keywords()) {
        let entries: Vec<(&str, &str)> = entries.iter().map(|(t, c)| (t.as_str(), c.as_str())).collect();
        let corpus = make_corpus(&entries);
        let options = make_options(2);
        let searcher = Searcher::new(&corpus, &options);

        prop_assert_eq!(searcher.result_items(&keywords), searcher.result_items(&keywords));
    }

    /// Ranked output is sorted, re-ranking is a no-op, and the comparator
    /// never calls two distinct items equal.
    #[test]
    fn prop_ranking_is_total_and_idempotent(entries in corpus_entries(), keywords in keywords()) {
        let entries: Vec<(&str, &str)> = entries.iter().map(|(t, c)| (t.as_str(), c.as_str())).collect();
        let corpus = make_corpus(&entries);
        let options = make_options(1);
        let items = Searcher::new(&corpus, &options).result_items(&keywords);

        for pair in items.windows(2) {
            prop_assert_eq!(compare_items(&pair[0], &pair[1]), Ordering::Less);
            prop_assert_eq!(compare_items(&pair[1], &pair[0]), Ordering::Greater);
        }
        let mut again = items.clone();
        rank(&mut again);
        prop_assert_eq!(again, items);
    }

    /// Exactly the documents with an occurrence in title or content come
    /// back, each with its raw hit total.
    #[test]
    fn prop_every_matching_document_is_listed(entries in corpus_entries(), keywords in keywords()) {
        let entries: Vec<(&str, &str)> = entries.iter().map(|(t, c)| (t.as_str(), c.as_str())).collect();
        let corpus = make_corpus(&entries);
        let options = make_options(1);
        let items = Searcher::new(&corpus, &options).result_items(&keywords);

        let expected: Vec<usize> = corpus
            .iter()
            .map(|doc| {
                find_occurrences(&keywords, &doc.title, MatchOptions::default()).occurrences.len()
                    + find_occurrences(&keywords, &doc.content, MatchOptions::default()).occurrences.len()
            })
            .filter(|&hits| hits > 0)
            .collect();

        prop_assert_eq!(items.len(), expected.len());
        for item in &items {
            prop_assert_eq!(item.hit_count, expected[item.id]);
            prop_assert!(item.included_count >= 1);
            prop_assert!(item.included_count <= keywords.len());
        }
    }
}
