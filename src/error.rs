// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only loading and configuration can fail. Matching, merging, excerpting and
//! ranking are total over their inputs and return plain values.

use thiserror::Error;

/// The corpus body could not be turned into documents.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON corpus: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML corpus: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("document url is not valid UTF-8 after percent-decoding: {0}")]
    InvalidUtf8Url(String),
}

/// Fetching or parsing the corpus failed. Nothing is installed.
#[derive(Error, Debug)]
pub enum CorpusLoadError {
    #[cfg(feature = "http")]
    #[error("failed to fetch {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("no corpus source can serve {0}")]
    Unsupported(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The search configuration is unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config has no corpus path")]
    MissingPath,

    #[error("invalid site origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },
}
