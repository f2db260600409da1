//! Rendered page snapshots and the query interface the extractors run against.
//!
//! The extraction core never talks to a browser. It sees a [`Document`]: a
//! read-only tree that answers selector queries, returns text content and
//! attributes, and reports each element's vertical rendered position.
//!
//! [`SnapshotDocument`] is the implementation backed by a JSON snapshot of a
//! rendered page:
//!
//! ```json
//! {
//!   "url": "https://claude.ai/chat/123",
//!   "root": {
//!     "tag": "body",
//!     "children": [
//!       { "tag": "div", "attrs": { "data-testid": "user-message" }, "top": 120.0,
//!         "children": ["Hello there"] }
//!     ]
//!   }
//! }
//! ```
//!
//! Children may be bare strings, `{ "text": "..." }` objects or elements.

pub mod selector;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use selector::{Selector, SelectorError};

use selector::{Combinator, Complex, Compound};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Read-only structured source the extractors query.
pub trait Document {
    /// All elements matching `selector`, in document order.
    ///
    /// With a `scope`, only descendants of that element are candidates,
    /// though ancestors outside the scope may still satisfy the selector.
    fn select(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId>;

    /// Concatenated text of all descendant text nodes, in document order.
    fn text_content(&self, node: NodeId) -> String;

    /// Attribute value, if present.
    fn attr(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Vertical rendered position of the element, if the snapshot recorded one.
    fn top(&self, node: NodeId) -> Option<f64>;
}

/// Errors while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read snapshot: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    url: Option<String>,
    root: RawNode,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Element {
        tag: String,
        #[serde(default)]
        attrs: BTreeMap<String, String>,
        #[serde(default)]
        top: Option<f64>,
        #[serde(default)]
        children: Vec<RawNode>,
    },
    Text {
        text: String,
    },
    Bare(String),
}

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: BTreeMap<String, String>,
        top: Option<f64>,
    },
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    parent: Option<usize>,
    children: Vec<usize>,
    kind: NodeKind,
}

/// A rendered page snapshot held as an arena of nodes.
///
/// Node indices follow pre-order traversal, so comparing ids compares
/// document order.
#[derive(Debug)]
pub struct SnapshotDocument {
    url: Option<String>,
    nodes: Vec<NodeData>,
}

impl SnapshotDocument {
    /// Load a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SnapshotError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        let mut doc = Self {
            url: raw.url,
            nodes: Vec::new(),
        };
        doc.push(raw.root, None);
        tracing::debug!(nodes = doc.nodes.len(), "Loaded page snapshot");
        Ok(doc)
    }

    /// The page URL recorded with the snapshot.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, raw: RawNode, parent: Option<usize>) -> usize {
        let idx = self.nodes.len();
        let (kind, children) = match raw {
            RawNode::Element {
                tag,
                attrs,
                top,
                children,
            } => (
                NodeKind::Element {
                    tag: tag.to_ascii_lowercase(),
                    attrs: attrs
                        .into_iter()
                        .map(|(k, v)| (k.to_ascii_lowercase(), v))
                        .collect(),
                    top: top.filter(|t| t.is_finite()),
                },
                children,
            ),
            RawNode::Text { text } | RawNode::Bare(text) => (NodeKind::Text(text), Vec::new()),
        };
        self.nodes.push(NodeData {
            parent,
            children: Vec::new(),
            kind,
        });
        for child in children {
            let child_idx = self.push(child, Some(idx));
            self.nodes[idx].children.push(child_idx);
        }
        idx
    }

    fn element(&self, idx: usize) -> Option<(&str, &BTreeMap<String, String>)> {
        match &self.nodes[idx].kind {
            NodeKind::Element { tag, attrs, .. } => Some((tag, attrs)),
            NodeKind::Text(_) => None,
        }
    }

    /// Index one past the last descendant of `idx`.
    fn subtree_end(&self, idx: usize) -> usize {
        let mut cur = idx;
        while let Some(&last) = self.nodes[cur].children.last() {
            cur = last;
        }
        cur + 1
    }

    fn matches_compound(&self, idx: usize, compound: &Compound) -> bool {
        let Some((tag, attrs)) = self.element(idx) else {
            return false;
        };
        if let Some(want) = &compound.tag {
            if want != tag {
                return false;
            }
        }
        if let Some(id) = &compound.id {
            if attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !compound.classes.is_empty() {
            let class = attrs.get("class").map(String::as_str).unwrap_or("");
            if !compound
                .classes
                .iter()
                .all(|c| class.split_whitespace().any(|w| w == c))
            {
                return false;
            }
        }
        compound
            .attrs
            .iter()
            .all(|a| a.matches(attrs.get(&a.name).map(String::as_str)))
    }

    /// Match `parts[..=i]` with `parts[i]` anchored at `idx`, right to left.
    fn matches_from(&self, idx: usize, complex: &Complex, i: usize) -> bool {
        let (combinator, compound) = &complex.parts[i];
        if !self.matches_compound(idx, compound) {
            return false;
        }
        if i == 0 {
            return true;
        }
        match combinator {
            Combinator::Child => self.nodes[idx]
                .parent
                .is_some_and(|p| self.matches_from(p, complex, i - 1)),
            Combinator::Descendant => {
                let mut ancestor = self.nodes[idx].parent;
                while let Some(p) = ancestor {
                    if self.matches_from(p, complex, i - 1) {
                        return true;
                    }
                    ancestor = self.nodes[p].parent;
                }
                false
            }
        }
    }

    fn matches(&self, idx: usize, selector: &Selector) -> bool {
        selector
            .alternatives()
            .iter()
            .any(|complex| self.matches_from(idx, complex, complex.parts.len() - 1))
    }
}

impl Document for SnapshotDocument {
    fn select(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId> {
        let range = match scope {
            Some(NodeId(s)) if s < self.nodes.len() => s + 1..self.subtree_end(s),
            Some(_) => return Vec::new(),
            None => 0..self.nodes.len(),
        };
        range
            .filter(|&idx| self.matches(idx, selector))
            .map(NodeId)
            .collect()
    }

    fn text_content(&self, node: NodeId) -> String {
        if node.0 >= self.nodes.len() {
            return String::new();
        }
        let mut out = String::new();
        for data in &self.nodes[node.0..self.subtree_end(node.0)] {
            if let NodeKind::Text(text) = &data.kind {
                out.push_str(text);
            }
        }
        out
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { attrs, .. } => {
                attrs.get(&name.to_ascii_lowercase()).map(String::as_str)
            }
            NodeKind::Text(_) => None,
        }
    }

    fn top(&self, node: NodeId) -> Option<f64> {
        match &self.nodes.get(node.0)?.kind {
            NodeKind::Element { top, .. } => *top,
            NodeKind::Text(_) => None,
        }
    }
}
