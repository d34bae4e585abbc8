// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration, as the site generator emits it.
//!
//! The keys mirror the theme's `localSearch` block, so the same JSON can be
//! handed to the CLI, the native session and the browser binding. Every field
//! has a default; only `path` is required for loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::corpus::CorpusFormat;
use crate::error::ConfigError;
use crate::matcher::MatchOptions;

/// Fallback base for relative document urls.
pub const DEFAULT_ORIGIN: &str = "http://localhost/";

/// Localized status messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Languages {
    /// Shown when nothing matches; `${query}` is replaced by the query.
    #[serde(alias = "hitsEmpty")]
    pub hits_empty: String,
    /// Shown above the results; `${hits}` is replaced by the result count.
    #[serde(alias = "hitsStats")]
    pub hits_stats: String,
}

impl Default for Languages {
    fn default() -> Self {
        Languages {
            hits_empty: "No results found for: ${query}".to_string(),
            hits_stats: "${hits} results found".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Corpus location: a URL or a file path. A `json` suffix selects the
    /// JSON format, anything else XML.
    pub path: String,
    /// Match keywords in their HTML-escaped form.
    pub unescape: bool,
    /// Content excerpts per document. Negative keeps all of them.
    #[serde(alias = "topNPerArticle")]
    pub top_n_per_article: i64,
    /// Load the corpus when the session starts instead of on first search.
    pub preload: bool,
    pub languages: Languages,
    /// Base that relative document urls resolve against.
    pub origin: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            path: String::new(),
            unescape: false,
            top_n_per_article: 1,
            preload: false,
            languages: Languages::default(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn new(path: impl Into<String>) -> Self {
        SearchConfig {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Check everything a session needs before it is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::MissingPath);
        }
        self.origin_url()?;
        Ok(())
    }

    pub fn origin_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.origin).map_err(|source| ConfigError::InvalidOrigin {
            origin: self.origin.clone(),
            source,
        })
    }

    /// `None` means every excerpt is kept.
    pub fn excerpt_limit(&self) -> Option<usize> {
        usize::try_from(self.top_n_per_article).ok()
    }

    pub fn format(&self) -> CorpusFormat {
        CorpusFormat::from_path(&self.path)
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::with_unescape(self.unescape)
    }
}
