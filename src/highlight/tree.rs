// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seam between "what to mark" and "how to insert it".
//!
//! [`TextTree`] is all the highlighter needs from a document: its text nodes
//! in document order, their values, what their parent element looks like, and
//! a way to replace one text node with a run of fragments. The browser
//! implements it over the DOM (`runtime::wasm::DomTree`); [`MemoryTree`] is a
//! plain arena used natively.

use std::convert::Infallible;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::MARK_CLASS;
use crate::types::Fragment;

/// The parts of a parent element the exclusion rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentInfo {
    /// Lower-case tag name.
    pub tag: String,
    pub classes: Vec<String>,
}

impl ParentInfo {
    pub fn new(tag: impl Into<String>) -> Self {
        ParentInfo {
            tag: tag.into().to_ascii_lowercase(),
            classes: Vec::new(),
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A tree whose text nodes can be split into marked fragments.
pub trait TextTree {
    /// Handle to a text node.
    type Node: Clone;
    type Error;

    /// Every text node under the root, in document order.
    ///
    /// Collected up front so splicing does not disturb the traversal.
    fn text_nodes(&self) -> Vec<Self::Node>;

    /// Current value of a text node.
    fn text(&self, node: &Self::Node) -> String;

    /// The element directly containing a text node.
    fn parent(&self, node: &Self::Node) -> Option<ParentInfo>;

    /// Replace a text node with `fragments`, keeping their order.
    fn splice(&mut self, node: &Self::Node, fragments: &[Fragment]) -> Result<(), Self::Error>;
}

/// Index of a node in a [`MemoryTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    Element(ParentInfo),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed element/text tree.
///
/// Spliced-out text nodes stay in the arena but are unlinked from their
/// parent, so ids handed out earlier never dangle.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<Node>,
}

impl MemoryTree {
    /// A tree holding a single root element.
    pub fn new(root_tag: &str) -> Self {
        MemoryTree {
            nodes: vec![Node {
                kind: NodeKind::Element(ParentInfo::new(root_tag)),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// A root element holding `text` as its only child.
    pub fn from_text(root_tag: &str, text: &str) -> Self {
        let mut tree = MemoryTree::new(root_tag);
        let root = tree.root();
        tree.append_text(root, text);
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn append_element(&mut self, parent: NodeId, element: ParentInfo) -> NodeId {
        self.push(parent, NodeKind::Element(element))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(NodeId, &Node)) {
        let node = &self.nodes[id.0];
        visit(id, node);
        for &child in &node.children {
            self.walk(child, visit);
        }
    }

    /// Concatenated text under `id`, ignoring element boundaries.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.walk(id, &mut |_, node| {
            if let NodeKind::Text(text) = &node.kind {
                out.push_str(text);
            }
        });
        out
    }

    /// Number of `<mark>` elements under `id`.
    pub fn mark_count(&self, id: NodeId) -> usize {
        let mut count = 0;
        self.walk(id, &mut |_, node| {
            if matches!(&node.kind, NodeKind::Element(info) if info.tag == "mark") {
                count += 1;
            }
        });
        count
    }

    /// Serialize the subtree under `id` as HTML.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        match &node.kind {
            NodeKind::Text(text) => out.push_str(&encode_text(text)),
            NodeKind::Element(info) => {
                out.push('<');
                out.push_str(&info.tag);
                if !info.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&encode_double_quoted_attribute(&info.classes.join(" ")));
                    out.push('"');
                }
                out.push('>');
                for &child in &node.children {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(&info.tag);
                out.push('>');
            }
        }
    }
}

impl TextTree for MemoryTree {
    type Node = NodeId;
    type Error = Infallible;

    fn text_nodes(&self) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(self.root(), &mut |id, node| {
            if matches!(node.kind, NodeKind::Text(_)) {
                found.push(id);
            }
        });
        found
    }

    fn text(&self, node: &NodeId) -> String {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element(_) => String::new(),
        }
    }

    fn parent(&self, node: &NodeId) -> Option<ParentInfo> {
        let parent = self.nodes[node.0].parent?;
        match &self.nodes[parent.0].kind {
            NodeKind::Element(info) => Some(info.clone()),
            NodeKind::Text(_) => None,
        }
    }

    fn splice(&mut self, node: &NodeId, fragments: &[Fragment]) -> Result<(), Infallible> {
        let Some(parent) = self.nodes[node.0].parent else {
            return Ok(());
        };

        let mut replacement = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let id = match fragment {
                Fragment::Plain(text) => self.push(parent, NodeKind::Text(text.clone())),
                Fragment::Marked(text) => {
                    let mark = self.push(
                        parent,
                        NodeKind::Element(ParentInfo::new("mark").with_classes([MARK_CLASS])),
                    );
                    self.push(mark, NodeKind::Text(text.clone()));
                    mark
                }
            };
            replacement.push(id);
        }

        // push() appended the new ids to the parent; move them into place.
        let children = &mut self.nodes[parent.0].children;
        children.truncate(children.len() - replacement.len());
        if let Some(index) = children.iter().position(|child| child == node) {
            children.splice(index..=index, replacement);
        }
        self.nodes[node.0].parent = None;
        Ok(())
    }
}
