// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: fetch, parse, normalize.
//!
//! The corpus is a flat list of articles produced by the site generator,
//! either as a JSON array or as an XML feed of `<entry>` elements. Both parse
//! into the same raw records and go through the same normalization, so the
//! two formats are interchangeable once loaded.
//!
//! Loading is all-or-nothing: a fetch error or a single malformed record
//! fails the whole load and nothing is installed.

mod json;
pub mod source;
mod xml;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{CorpusLoadError, ParseError};
use crate::types::Document;

pub use source::{AutoSource, CorpusSource, StaticSource};
#[cfg(feature = "fs")]
pub use source::FileSource;
#[cfg(feature = "http")]
pub use source::HttpSource;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
static SLASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").expect("valid slash pattern"));
static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid scheme pattern"));

/// Wire format of the corpus resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    Xml,
}

impl CorpusFormat {
    /// A path ending in `json` is JSON; everything else is XML.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with("json") {
            CorpusFormat::Json
        } else {
            CorpusFormat::Xml
        }
    }
}

/// A record as it appears in the resource, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
}

/// The loaded, normalized document collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Wrap documents that are already normalized.
    pub fn new(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    /// Parse and normalize a resource body.
    pub fn parse(body: &str, format: CorpusFormat) -> Result<Self, ParseError> {
        let records = match format {
            CorpusFormat::Json => json::parse_records(body)?,
            CorpusFormat::Xml => xml::parse_records(body)?,
        };
        Self::from_records(records)
    }

    /// Normalize raw records, discarding the ones without a title.
    pub fn from_records(records: impl IntoIterator<Item = RawRecord>) -> Result<Self, ParseError> {
        let mut documents = Vec::new();
        let mut discarded = 0usize;
        for record in records {
            match normalize_record(record)? {
                Some(document) => documents.push(document),
                None => discarded += 1,
            }
        }
        if discarded > 0 {
            log::debug!("discarded {} corpus records without a title", discarded);
        }
        Ok(Corpus { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Fetch `path` from `source` and parse it in the format its suffix selects.
pub async fn load<S>(source: &S, path: &str) -> Result<Corpus, CorpusLoadError>
where
    S: CorpusSource + ?Sized,
{
    let body = source.fetch(path).await?;
    let corpus = Corpus::parse(&body, CorpusFormat::from_path(path))?;
    log::info!("loaded {} documents from {}", corpus.len(), path);
    Ok(corpus)
}

/// Turn a raw record into a document, or `None` when it has no title.
pub fn normalize_record(record: RawRecord) -> Result<Option<Document>, ParseError> {
    let title = match record.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Ok(None),
    };

    let content = record
        .content
        .as_deref()
        .map(|content| strip_tags(content.trim()).into_owned())
        .unwrap_or_default();

    let url = normalize_url(record.url.as_deref().unwrap_or_default())?;

    Ok(Some(Document { title, content, url }))
}

/// Remove everything that looks like an HTML tag.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    HTML_TAG.replace_all(text, "")
}

/// Percent-decode a url and collapse runs of `/`, leaving a scheme's `//` alone.
pub fn normalize_url(url: &str) -> Result<String, ParseError> {
    let decoded = urlencoding::decode(url).map_err(|_| ParseError::InvalidUtf8Url(url.to_string()))?;
    let (scheme, rest) = match SCHEME.find(&decoded) {
        Some(found) => decoded.split_at(found.end()),
        None => ("", decoded.as_ref()),
    };
    Ok(format!("{}{}", scheme, SLASH_RUN.replace_all(rest, "/")))
}
