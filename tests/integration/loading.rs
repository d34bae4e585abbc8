//! Corpus loading through the real sources.

use std::fs;

use super::common::{blog_docs, corpus_json, corpus_xml};
use scour::{load, AutoSource, CorpusLoadError, FileSource, ParseError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_json_and_xml_files_load_alike() {
    let dir = TempDir::new().unwrap();
    let docs = blog_docs();
    let json = write(&dir, "search.json", &corpus_json(&docs));
    let xml = write(&dir, "search.xml", &corpus_xml(&docs));

    let from_json = load(&FileSource, &json).await.unwrap();
    let from_xml = load(&AutoSource::new(), &xml).await.unwrap();

    assert_eq!(from_json, from_xml);
    // The untitled draft is dropped, the doubled slash collapsed
    assert_eq!(from_json.len(), docs.len() - 1);
    assert!(from_json.iter().all(|doc| !doc.title.is_empty()));
    assert_eq!(from_json.documents()[0].url, "/posts/getting-started/");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    let err = load(&FileSource, &path.to_string_lossy()).await.unwrap_err();

    match err {
        CorpusLoadError::Io { path: failed, .. } => assert!(failed.ends_with("missing.json")),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "search.json", r#"[{"title": "unterminated"#);
    let err = load(&FileSource, &path).await.unwrap_err();
    assert!(matches!(err, CorpusLoadError::Parse(ParseError::Json(_))), "{:?}", err);
}

#[tokio::test]
async fn test_malformed_xml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "search.xml", "<search><entry><title>open</entry>");
    let err = load(&FileSource, &path).await.unwrap_err();
    assert!(matches!(err, CorpusLoadError::Parse(ParseError::Xml(_))), "{:?}", err);
}

#[tokio::test]
async fn test_loaded_urls_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "search.json",
        r#"[{"title": "Café", "content": "", "url": "/posts//caf%C3%A9/"}]"#,
    );
    let corpus = load(&FileSource, &path).await.unwrap();
    assert_eq!(corpus.documents()[0].url, "/posts/café/");
}
