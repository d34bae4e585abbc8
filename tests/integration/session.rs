//! Sessions against sources that count, stall and fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use scour::{CorpusLoadError, CorpusSource, LoadState, SearchConfig, SearchSession, SearchView};

const BODY: &str = r#"[
    {"title": "Hello World", "content": "this is a test about hello", "url": "/a/"},
    {"title": "Goodbye", "content": "nothing to see", "url": "/b/"}
]"#;

/// Serves `BODY`, failing the first `failures` fetches.
#[derive(Default)]
struct CountingSource {
    fetches: Arc<AtomicUsize>,
    failures: usize,
}

impl CountingSource {
    fn failing(failures: usize) -> Self {
        CountingSource {
            failures,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CorpusSource for CountingSource {
    async fn fetch(&self, path: &str) -> Result<String, CorpusLoadError> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
        // Give concurrent callers a chance to pile up behind this load
        tokio::task::yield_now().await;
        if attempt < self.failures {
            return Err(CorpusLoadError::Status {
                path: path.to_string(),
                status: 503,
            });
        }
        Ok(BODY.to_string())
    }
}

fn session(source: CountingSource) -> (SearchSession<CountingSource>, Arc<AtomicUsize>) {
    let fetches = Arc::clone(&source.fetches);
    let session = SearchSession::new(SearchConfig::new("/search.json"), source).unwrap();
    (session, fetches)
}

#[tokio::test]
async fn test_corpus_is_fetched_once() {
    let (session, fetches) = session(CountingSource::default());

    for query in ["hello", "goodbye", "hello world"] {
        session.search(query).await.unwrap();
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_concurrent_searches_share_one_load() {
    let (session, fetches) = session(CountingSource::default());

    let (a, b, c) = tokio::join!(
        session.search("hello"),
        session.search("goodbye"),
        session.ensure_loaded()
    );

    assert_eq!(a.unwrap().len(), 1);
    assert_eq!(b.unwrap().len(), 1);
    assert_eq!(c.unwrap().len(), 2);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_load_is_retried() {
    let (session, fetches) = session(CountingSource::failing(1));

    let err = session.search("hello").await.unwrap_err();
    assert!(matches!(err, CorpusLoadError::Status { status: 503, .. }));
    assert_eq!(session.load_state(), LoadState::Failed);
    assert!(!session.is_loaded());

    let view = session.search("hello").await.unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(session.load_state(), LoadState::Loaded { documents: 2 });
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_preload_failure_leaves_session_usable() {
    let mut config = SearchConfig::new("/search.json");
    config.preload = true;
    let session = SearchSession::new(config, CountingSource::failing(1)).unwrap();

    session.start().await;
    assert_eq!(session.load_state(), LoadState::Failed);
    assert!(!session.search("hello").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_subscribers_see_load_complete() {
    let (session, _) = session(CountingSource::default());
    let mut state = session.subscribe();
    assert_eq!(*state.borrow(), LoadState::Loading);

    session.ensure_loaded().await.unwrap();
    assert!(state.has_changed().unwrap());
    assert_eq!(*state.borrow_and_update(), LoadState::Loaded { documents: 2 });
}

#[tokio::test]
async fn test_blank_query_skips_loading() {
    let (session, fetches) = session(CountingSource::default());
    assert_eq!(session.search(" \t ").await.unwrap(), SearchView::Cleared);
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
    assert_eq!(session.load_state(), LoadState::Loading);
}
