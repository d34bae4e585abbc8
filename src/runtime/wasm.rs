// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for scour.
//!
//! The page script owns the network: it fetches the corpus resource and hands
//! the body over together with the theme's search configuration. Everything
//! after that, matching, excerpts, ranking, markup and page highlighting,
//! runs here.
//!
//! ```js
//! const body = await (await fetch(config.path)).text();
//! const search = new ScourSearch(config, body, () => loader.remove());
//! input.addEventListener("input", () => {
//!     const { resultsHtml, statsHtml } = search.search(input.value);
//!     results.innerHTML = resultsHtml;
//!     stats.innerHTML = statsHtml;
//! });
//!
//! // On the destination page
//! highlightPage(document.querySelector(".post-content"), false);
//! ```

use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Node, Text};

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::highlight::{highlight_from_url, ExclusionSet, ParentInfo, TextTree};
use crate::matcher::MatchOptions;
use crate::render::MARK_CLASS;
use crate::search::{SearchOptions, SearchView, Searcher};
use crate::types::Fragment;

/// `NodeFilter.SHOW_TEXT`
const SHOW_TEXT: u32 = 0x4;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// What the page script writes into its containers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchView {
    results_html: String,
    stats_html: String,
    count: usize,
    cleared: bool,
}

impl From<&SearchView> for JsSearchView {
    fn from(view: &SearchView) -> Self {
        JsSearchView {
            results_html: view.results_html(),
            stats_html: view.stats_html().to_string(),
            count: view.len(),
            cleared: matches!(view, SearchView::Cleared),
        }
    }
}

/// A loaded corpus plus the options to search it with.
#[wasm_bindgen]
pub struct ScourSearch {
    corpus: Corpus,
    options: SearchOptions,
}

#[wasm_bindgen]
impl ScourSearch {
    /// Parse `body` in the format `config.path` selects.
    ///
    /// `on_loaded` is called once with the document count, the signal to
    /// remove a loading indicator. Nothing is called when parsing fails.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, body: &str, on_loaded: Option<Function>) -> Result<ScourSearch, JsValue> {
        let config: SearchConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        config.validate().map_err(to_js_error)?;

        let options = SearchOptions::from_config(&config).map_err(to_js_error)?;
        let corpus = Corpus::parse(body, config.format())
            .map_err(|e| JsValue::from_str(&format!("Failed to parse corpus: {}", e)))?;

        if let Some(callback) = on_loaded {
            callback.call1(&JsValue::NULL, &JsValue::from(corpus.len() as u32))?;
        }
        Ok(ScourSearch { corpus, options })
    }

    /// Number of documents.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.corpus.len()
    }

    /// Run a query: `{ resultsHtml, statsHtml, count, cleared }`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let view = Searcher::new(&self.corpus, &self.options).search(query);
        to_value(&JsSearchView::from(&view)).map_err(to_js_error)
    }
}

/// Highlight the keywords of the current page url inside `root`.
///
/// Returns the number of marks inserted; zero without a `highlight` parameter.
#[wasm_bindgen(js_name = "highlightPage")]
pub fn highlight_page(root: &Node, unescape: bool) -> Result<usize, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let href = window.location().href()?;
    let mut tree = DomTree::new(root.clone())?;
    highlight_from_url(
        &mut tree,
        &href,
        MatchOptions::with_unescape(unescape),
        &ExclusionSet::default(),
    )
}

/// The live DOM under one root, as a [`TextTree`].
pub struct DomTree {
    root: Node,
    document: web_sys::Document,
}

impl DomTree {
    pub fn new(root: Node) -> Result<Self, JsValue> {
        let document = root
            .owner_document()
            .ok_or_else(|| JsValue::from_str("root is not attached to a document"))?;
        Ok(DomTree { root, document })
    }

    fn fragment_node(&self, fragment: &Fragment) -> Result<Node, JsValue> {
        match fragment {
            Fragment::Plain(text) => Ok(self.document.create_text_node(text).into()),
            Fragment::Marked(text) => {
                let mark = self.document.create_element("mark")?;
                mark.set_class_name(MARK_CLASS);
                mark.set_text_content(Some(text));
                Ok(mark.into())
            }
        }
    }
}

impl TextTree for DomTree {
    type Node = Text;
    type Error = JsValue;

    fn text_nodes(&self) -> Vec<Text> {
        let walker = match self
            .document
            .create_tree_walker_with_what_to_show(&self.root, SHOW_TEXT)
        {
            Ok(walker) => walker,
            Err(_) => return Vec::new(),
        };

        let mut nodes = Vec::new();
        while let Ok(Some(node)) = walker.next_node() {
            if let Ok(text) = node.dyn_into::<Text>() {
                nodes.push(text);
            }
        }
        nodes
    }

    fn text(&self, node: &Text) -> String {
        node.data()
    }

    fn parent(&self, node: &Text) -> Option<ParentInfo> {
        let element = node.parent_element()?;
        let classes = element.class_name();
        Some(ParentInfo::new(element.tag_name()).with_classes(classes.split_whitespace()))
    }

    /// Fragments go in before the node; a trailing plain fragment becomes the
    /// node's own value.
    fn splice(&mut self, node: &Text, fragments: &[Fragment]) -> Result<(), JsValue> {
        let Some(parent) = node.parent_node() else {
            return Ok(());
        };

        let (before, tail) = match fragments.split_last() {
            Some((Fragment::Plain(tail), before)) => (before, tail.as_str()),
            _ => (fragments, ""),
        };

        for fragment in before {
            let inserted = self.fragment_node(fragment)?;
            parent.insert_before(&inserted, Some(node.as_ref()))?;
        }
        node.set_data(tail);
        Ok(())
    }
}
