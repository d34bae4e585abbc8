// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where corpus bodies come from.
//!
//! The loader only needs "give me the body at this path". Over HTTP that is
//! `reqwest`, on disk `tokio::fs`, in the browser the JavaScript side fetches
//! and hands the text over through [`StaticSource`].

use async_trait::async_trait;

use crate::error::CorpusLoadError;

#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Fetch the raw body stored at `path`.
    async fn fetch(&self, path: &str) -> Result<String, CorpusLoadError>;
}

/// A body that is already in memory, whatever the path.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        StaticSource { body: body.into() }
    }
}

#[async_trait]
impl CorpusSource for StaticSource {
    async fn fetch(&self, _path: &str) -> Result<String, CorpusLoadError> {
        Ok(self.body.clone())
    }
}

/// Reads the corpus from the local filesystem.
#[cfg(feature = "fs")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

#[cfg(feature = "fs")]
#[async_trait]
impl CorpusSource for FileSource {
    async fn fetch(&self, path: &str) -> Result<String, CorpusLoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CorpusLoadError::Io {
                path: path.to_string(),
                source,
            })
    }
}

/// Fetches the corpus over HTTP(S).
#[cfg(feature = "http")]
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(client: reqwest::Client) -> Self {
        HttpSource { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CorpusSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, CorpusLoadError> {
        let fetch_error = |source| CorpusLoadError::Fetch {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(path).send().await.map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CorpusLoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(fetch_error)
    }
}

/// Picks HTTP for `http://` and `https://` paths and the filesystem otherwise.
#[derive(Debug, Clone, Default)]
pub struct AutoSource {
    #[cfg(feature = "http")]
    http: HttpSource,
    #[cfg(feature = "fs")]
    file: FileSource,
}

impl AutoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[async_trait]
impl CorpusSource for AutoSource {
    async fn fetch(&self, path: &str) -> Result<String, CorpusLoadError> {
        if is_remote(path) {
            #[cfg(feature = "http")]
            return self.http.fetch(path).await;
        } else {
            #[cfg(feature = "fs")]
            return self.file.fetch(path).await;
        }
        #[allow(unreachable_code)]
        Err(CorpusLoadError::Unsupported(path.to_string()))
    }
}
