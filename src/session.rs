// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: one configuration, one lazily loaded corpus.
//!
//! The corpus is fetched at most once per session. Callers that arrive while
//! a load is in flight wait on that same load instead of starting another.
//! A failed load caches nothing, so the next search tries again.
//!
//! Load progress is published on a `watch` channel so a UI can drop its
//! loading indicator once documents are in. On failure the state goes to
//! [`LoadState::Failed`] and the indicator is expected to stay.

use std::sync::Arc;

use tokio::sync::{watch, OnceCell};

use crate::config::SearchConfig;
use crate::corpus::{self, Corpus, CorpusSource};
use crate::error::{ConfigError, CorpusLoadError};
use crate::search::{SearchOptions, SearchView, Searcher};

/// Where the session's corpus load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Not loaded yet, or loading.
    Loading,
    Loaded { documents: usize },
    /// The last attempt failed; the next search retries.
    Failed,
}

pub struct SearchSession<S> {
    config: SearchConfig,
    options: SearchOptions,
    source: S,
    corpus: OnceCell<Arc<Corpus>>,
    state: watch::Sender<LoadState>,
}

impl<S: CorpusSource> SearchSession<S> {
    pub fn new(config: SearchConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = SearchOptions::from_config(&config)?;
        let (state, _) = watch::channel(LoadState::Loading);
        Ok(SearchSession {
            config,
            options,
            source,
            corpus: OnceCell::new(),
            state,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Load eagerly when the configuration asks for preloading.
    ///
    /// A preload failure is only logged; the first search retries it.
    pub async fn start(&self) {
        if self.config.preload {
            if let Err(err) = self.ensure_loaded().await {
                log::warn!("preloading {} failed: {}", self.config.path, err);
            }
        }
    }

    /// The corpus, loading it first if needed.
    pub async fn ensure_loaded(&self) -> Result<Arc<Corpus>, CorpusLoadError> {
        let corpus = self
            .corpus
            .get_or_try_init(|| async {
                let result = corpus::load(&self.source, &self.config.path).await;
                match &result {
                    Ok(corpus) => {
                        self.state.send_replace(LoadState::Loaded {
                            documents: corpus.len(),
                        });
                    }
                    Err(err) => {
                        log::warn!("loading {} failed: {}", self.config.path, err);
                        self.state.send_replace(LoadState::Failed);
                    }
                }
                result.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(corpus))
    }

    /// Watch the load state.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    pub fn load_state(&self) -> LoadState {
        *self.state.borrow()
    }

    pub fn is_loaded(&self) -> bool {
        self.corpus.initialized()
    }

    /// Answer a query, loading the corpus on first use.
    ///
    /// A blank query never triggers a load.
    pub async fn search(&self, raw_query: &str) -> Result<SearchView, CorpusLoadError> {
        if raw_query.trim().is_empty() {
            return Ok(SearchView::Cleared);
        }
        let corpus = self.ensure_loaded().await?;
        Ok(Searcher::new(&corpus, &self.options).search(raw_query))
    }
}
