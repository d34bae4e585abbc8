// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over a loaded corpus: where the rubber meets the road.
//!
//! Every query is answered from scratch. There is no index to consult, just
//! the flat list of documents, each matched, excerpted and rendered, then the
//! survivors ranked. For the few hundred articles of a blog this takes well
//! under a frame.
//!
//! ```text
//! raw query ──► parse_query ──► keywords
//!                                  │
//!          for each document ──► select_excerpts ──► render_item
//!                                  │
//!                              rank items ──► SearchView
//! ```

pub mod query;

pub use query::{parse_query, Query};

use url::Url;

use crate::config::{Languages, SearchConfig};
use crate::corpus::{Corpus, CorpusFormat};
use crate::error::ConfigError;
use crate::excerpt::{select_excerpts, Excerpts};
use crate::matcher::MatchOptions;
use crate::render::{render_empty_stats, render_hits_stats, render_item, render_result_list, result_link};
use crate::scoring::compare_items;
use crate::types::{Document, ResultItem};

/// Everything about a search pass that comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub match_options: MatchOptions,
    /// Content excerpts kept per document; `None` keeps all.
    pub top_n: Option<usize>,
    pub format: CorpusFormat,
    pub origin: Url,
    pub languages: Languages,
}

impl SearchOptions {
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(SearchOptions {
            match_options: config.match_options(),
            top_n: config.excerpt_limit(),
            format: config.format(),
            origin: config.origin_url()?,
            languages: config.languages.clone(),
        })
    }
}

/// What the result and stats containers should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// Blank query: both containers are emptied.
    Cleared,
    /// Nothing matched.
    NoResults { query: String, stats: String },
    /// Ranked items plus the stats line.
    Results { items: Vec<ResultItem>, stats: String },
}

impl SearchView {
    /// Content for the results container.
    pub fn results_html(&self) -> String {
        match self {
            SearchView::Results { items, .. } => {
                render_result_list(items.iter().map(|item| item.markup.as_str()))
            }
            SearchView::Cleared | SearchView::NoResults { .. } => String::new(),
        }
    }

    /// Content for the stats container.
    pub fn stats_html(&self) -> &str {
        match self {
            SearchView::Cleared => "",
            SearchView::NoResults { stats, .. } | SearchView::Results { stats, .. } => stats,
        }
    }

    pub fn items(&self) -> &[ResultItem] {
        match self {
            SearchView::Results { items, .. } => items,
            SearchView::Cleared | SearchView::NoResults { .. } => &[],
        }
    }

    /// Number of matching documents.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// One matching document of a query.
#[derive(Debug, Clone)]
pub struct RankedMatch<'a> {
    pub document: &'a Document,
    pub excerpts: Excerpts,
    /// Link to the document, carrying the keywords.
    pub href: String,
    pub item: ResultItem,
}

/// Runs queries against one corpus.
#[derive(Debug, Clone)]
pub struct Searcher<'a> {
    corpus: &'a Corpus,
    options: &'a SearchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(corpus: &'a Corpus, options: &'a SearchOptions) -> Self {
        Searcher { corpus, options }
    }

    /// Every document matching `keywords` with its excerpts and rendered
    /// item, in ranked order.
    pub fn ranked_matches<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<RankedMatch<'a>> {
        let mut matches = Vec::new();

        for document in self.corpus {
            let excerpts = select_excerpts(
                document,
                keywords,
                self.options.match_options,
                self.options.top_n,
            );
            if !excerpts.is_match() {
                continue;
            }

            let href = result_link(&self.options.origin, &document.url, keywords);
            let item = ResultItem {
                markup: render_item(document, &excerpts, &href),
                hit_count: excerpts.hit_count,
                included_count: excerpts.included_count(),
                id: matches.len(),
            };
            matches.push(RankedMatch {
                document,
                excerpts,
                href,
                item,
            });
        }

        matches.sort_by(|a, b| compare_items(&a.item, &b.item));
        matches
    }

    /// Rendered, ranked items for every document matching `keywords`.
    pub fn result_items<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<ResultItem> {
        self.ranked_matches(keywords)
            .into_iter()
            .map(|matched| matched.item)
            .collect()
    }

    /// Answer a raw query typed into the search box.
    pub fn search(&self, raw_query: &str) -> SearchView {
        let query = parse_query(raw_query, self.options.format);
        if query.is_empty() {
            return SearchView::Cleared;
        }

        let items = self.result_items(&query.keywords);
        log::debug!(
            "query {:?}: {} keywords, {} of {} documents matched",
            query.text,
            query.keywords.len(),
            items.len(),
            self.corpus.len()
        );

        if items.is_empty() {
            let stats = render_empty_stats(&self.options.languages.hits_empty, &query.text);
            SearchView::NoResults {
                query: query.text,
                stats,
            }
        } else {
            let stats = render_hits_stats(&self.options.languages.hits_stats, items.len());
            SearchView::Results { items, stats }
        }
    }
}
