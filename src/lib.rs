//! In-memory site search: keyword matching, excerpt selection and highlighting.
//!
//! A static site ships its articles as one JSON or XML resource. This crate
//! loads that corpus, answers queries against it by brute force (there is no
//! index, the corpus is small), renders highlighted result markup, and marks
//! the keywords again on the page a result links to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  corpus/    │────▶│  matcher.rs  │────▶│  slice.rs   │────▶│ excerpt.rs  │
//! │ (load, xml, │     │ (occurrences)│     │ (greedy     │     │ (windows,   │
//! │  json)      │     │              │     │  merge)     │     │  top-n)     │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                    │                   │
//!        │                   ▼                    ▼                   ▼
//!        │            ┌─────────────┐     ┌──────────────────────────────────┐
//!        │            │ highlight/  │     │ search/ + scoring/ + render.rs   │
//!        │            │ (live page  │     │ (query, rank, result markup)     │
//!        │            │  marks)     │     └──────────────────────────────────┘
//!        │            └─────────────┘                     ▲
//!        │                                                │
//!        └──────────────────▶  session.rs  ───────────────┘
//!                        (config, cached load)
//! ```
//!
//! # Usage
//!
//! ```
//! use scour::{Corpus, CorpusFormat, SearchConfig, SearchOptions, Searcher};
//!
//! let body = r#"[{"title": "Hello World", "content": "a test about hello", "url": "/a"}]"#;
//! let corpus = Corpus::parse(body, CorpusFormat::Json).unwrap();
//! let options = SearchOptions::from_config(&SearchConfig::new("/search.json")).unwrap();
//!
//! let view = Searcher::new(&corpus, &options).search("hello");
//! assert_eq!(view.len(), 1);
//! assert!(view.results_html().contains("<mark class=\"search-keyword\">Hello</mark>"));
//! ```

pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod excerpt;
pub mod highlight;
pub mod matcher;
pub mod render;
pub mod runtime;
pub mod scoring;
pub mod search;
pub mod session;
pub mod slice;
pub mod testing;
pub mod types;
pub mod util;

// Re-exports for public API
pub use config::{Languages, SearchConfig, DEFAULT_ORIGIN};
pub use corpus::{load, AutoSource, Corpus, CorpusFormat, CorpusSource, RawRecord, StaticSource};
#[cfg(feature = "fs")]
pub use corpus::FileSource;
#[cfg(feature = "http")]
pub use corpus::HttpSource;
pub use error::{ConfigError, CorpusLoadError, ParseError};
pub use excerpt::{select_excerpts, Excerpts};
pub use highlight::{
    highlight, highlight_from_url, keywords_from_url, mark_text, ExclusionSet, MemoryTree, ParentInfo,
    TextTree,
};
pub use matcher::{find_occurrences, MatchOptions, Matches};
pub use scoring::{compare_items, rank};
pub use search::{parse_query, Query, SearchOptions, SearchView, Searcher};
pub use session::{LoadState, SearchSession};
pub use slice::{merge_into_slice, Cursor};
pub use types::{Document, Fragment, Hit, Occurrence, ResultItem, Slice};
