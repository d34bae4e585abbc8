// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup for result items, the result list and the stats line.
//!
//! Corpus text is already in HTML text form: the loader strips tags but keeps
//! entity references such as `&lt;` and `&amp;`. Segments are written with
//! those references intact; only a bare `&`, `<` or `>` gets encoded, so the
//! page shows `Vec<u8>` for `Vec&lt;u8&gt;` and stray brackets cannot open
//! markup. Encoding happens segment by segment while the marks are inserted,
//! so hit offsets computed on the raw text stay valid.

use std::borrow::Cow;
use std::sync::LazyLock;

use html_escape::encode_double_quoted_attribute;
use regex::{Captures, Regex};
use url::Url;

use crate::excerpt::Excerpts;
use crate::types::{Document, Fragment, Slice};

/// Class put on every `<mark>` element, in result lists and on pages.
pub const MARK_CLASS: &str = "search-keyword";

/// Query parameter carrying keywords to the destination page.
pub const HIGHLIGHT_PARAM: &str = "highlight";

/// Placeholder replaced by the query in the empty-state template.
pub const QUERY_TOKEN: &str = "${query}";

/// Placeholder replaced by the result count in the stats template.
pub const HITS_TOKEN: &str = "${hits}";

/// A complete entity reference, or a lone character that must be encoded.
static ENTITY_OR_SPECIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);|[&<>]").expect("valid entity pattern")
});

/// Encode `text` for insertion as HTML, keeping its entity references.
///
/// ```
/// use scour::render::encode_corpus_text;
///
/// assert_eq!(encode_corpus_text("Vec&lt;u8&gt; & <b>"), "Vec&lt;u8&gt; &amp; &lt;b&gt;");
/// ```
pub fn encode_corpus_text(text: &str) -> Cow<'_, str> {
    ENTITY_OR_SPECIAL.replace_all(text, |caps: &Captures| match &caps[0] {
        "&" => "&amp;".to_string(),
        "<" => "&lt;".to_string(),
        ">" => "&gt;".to_string(),
        entity => entity.to_string(),
    })
}

/// Render `text[slice.start..slice.end]` with every hit wrapped in a mark.
pub fn highlight_markup(text: &str, slice: &Slice) -> String {
    let mut out = String::with_capacity(slice.end.saturating_sub(slice.start) + 32 * slice.hit_count());
    let mut index = slice.start;
    for hit in &slice.hits {
        out.push_str(&encode_corpus_text(&text[index..hit.position]));
        out.push_str("<mark class=\"");
        out.push_str(MARK_CLASS);
        out.push_str("\">");
        out.push_str(&encode_corpus_text(&text[hit.position..hit.end()]));
        out.push_str("</mark>");
        index = hit.end();
    }
    out.push_str(&encode_corpus_text(&text[index..slice.end]));
    out
}

/// Split `text[slice.start..slice.end]` into plain and marked pieces.
///
/// Empty plain pieces between adjacent hits are left out.
pub fn slice_fragments(text: &str, slice: &Slice) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(2 * slice.hits.len() + 1);
    let mut index = slice.start;
    for hit in &slice.hits {
        if hit.position > index {
            fragments.push(Fragment::Plain(text[index..hit.position].to_string()));
        }
        fragments.push(Fragment::Marked(text[hit.position..hit.end()].to_string()));
        index = hit.end();
    }
    if index < slice.end {
        fragments.push(Fragment::Plain(text[index..slice.end].to_string()));
    }
    fragments
}

/// Link to a document that carries the keywords for page highlighting.
///
/// Relative urls resolve against `origin`. A url that cannot be resolved is
/// kept as-is with the parameter appended by hand.
pub fn result_link<S: AsRef<str>>(origin: &Url, url: &str, keywords: &[S]) -> String {
    let joined = keywords
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    match origin.join(url) {
        Ok(mut link) => {
            link.query_pairs_mut().append_pair(HIGHLIGHT_PARAM, &joined);
            link.into()
        }
        Err(err) => {
            log::warn!("keeping unresolvable document url {:?}: {}", url, err);
            let separator = if url.contains('?') { '&' } else { '?' };
            let encoded: String = url::form_urlencoded::byte_serialize(joined.as_bytes()).collect();
            format!("{}{}{}={}", url, separator, HIGHLIGHT_PARAM, encoded)
        }
    }
}

/// Markup for one matching document.
pub fn render_item(document: &Document, excerpts: &Excerpts, href: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"local-search-hit-item\"><a href=\"");
    out.push_str(&encode_double_quoted_attribute(href));
    out.push_str("\"><span class=\"search-result-title\">");
    match &excerpts.title {
        Some(slice) => out.push_str(&highlight_markup(&document.title, slice)),
        None => out.push_str(&encode_corpus_text(&document.title)),
    }
    out.push_str("</span>");

    for slice in &excerpts.content {
        out.push_str("<p class=\"search-result\">");
        out.push_str(&highlight_markup(&document.content, slice));
        out.push_str("...</p>");
    }

    out.push_str("</a></div>");
    out
}

/// Wrap rendered items into the result list container.
pub fn render_result_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("<div class=\"search-result-list\">");
    for item in items {
        out.push_str(item);
    }
    out.push_str("</div>");
    out
}

/// Replace the first `token` in `template` with `value`, verbatim.
pub fn fill_template(template: &str, token: &str, value: &str) -> String {
    template.replacen(token, value, 1)
}

/// Stats line for a query without results.
///
/// XML queries already carry `&lt;`/`&gt;`, so the query is encoded like
/// corpus text and shows up as typed.
pub fn render_empty_stats(hits_empty: &str, query: &str) -> String {
    let message = fill_template(hits_empty, QUERY_TOKEN, &encode_corpus_text(query));
    format!("<div class=\"search-result-stats\">{}</div>", message)
}

/// Stats line for a query with `count` results.
pub fn render_hits_stats(hits_stats: &str, count: usize) -> String {
    let message = fill_template(hits_stats, HITS_TOKEN, &count.to_string());
    format!("<hr><div class=\"search-result-stats\">{}</div>", message)
}
