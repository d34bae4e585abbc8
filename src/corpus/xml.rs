// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! XML corpus: every `<entry>` element, at any depth, with `title`,
//! `content` and `url` children.
//!
//! Field values are the element's full text content, CDATA included. A
//! missing child reads as absent, which drops the entry when it is the title.

use roxmltree::{Document, Node, ParsingOptions};

use super::RawRecord;
use crate::error::ParseError;

pub(super) fn parse_records(body: &str) -> Result<Vec<RawRecord>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(body, options)?;

    let records = document
        .descendants()
        .filter(|node| node.is_element() && node.has_tag_name("entry"))
        .map(|entry| RawRecord {
            title: field(entry, "title"),
            content: field(entry, "content"),
            url: field(entry, "url"),
        })
        .collect();
    Ok(records)
}

/// Text content of the first descendant element called `name`.
fn field(entry: Node<'_, '_>, name: &str) -> Option<String> {
    entry
        .descendants()
        .skip(1)
        .find(|node| node.is_element() && node.has_tag_name(name))
        .map(text_content)
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}
