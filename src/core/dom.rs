// src/core/dom.rs
// Immutable document tree. Nodes live in one Vec in document (pre-)order, so
// "next node in document order" is `id + 1` and a subtree is a contiguous
// index range `id..end`.

use std::collections::HashMap;
use std::ops::Range;

use scraper::{Html, node::Node as HtmlNode};

pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    next_sibling: Option<NodeId>,
    /// One past the last descendant.
    end: NodeId,
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Parse a full HTML page. Comments, doctypes and processing
    /// instructions are dropped; only elements and text survive.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut nodes: Vec<Node> = Vec::new();
        let mut index = HashMap::new();

        for n in parsed.tree.root().descendants() {
            let kind = match n.value() {
                HtmlNode::Document | HtmlNode::Fragment => NodeKind::Root,
                HtmlNode::Element(el) => NodeKind::Element(Element {
                    name: el.name().to_ascii_lowercase(),
                    attrs: el.attrs().map(|(k, v)| (s!(k), s!(v))).collect(),
                }),
                HtmlNode::Text(text) => {
                    let t: &str = text;
                    NodeKind::Text(s!(t))
                }
                _ => continue,
            };

            let parent = n.parent().and_then(|p| index.get(&p.id()).copied());
            let id = nodes.len();
            index.insert(n.id(), id);
            if let Some(p) = parent {
                nodes[p].children.push(id);
            }
            nodes.push(Node { kind, parent, children: Vec::new(), next_sibling: None, end: id + 1 });
        }

        // Siblings and subtree ends; children always have larger ids than
        // their parent, so one backward pass settles every `end`.
        for id in (0..nodes.len()).rev() {
            let kids = nodes[id].children.clone();
            for pair in kids.windows(2) {
                nodes[pair[0]].next_sibling = Some(pair[1]);
            }
            if let Some(&last) = kids.last() {
                nodes[id].end = nodes[last].end;
            }
        }

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[][..], |n| n.children.as_slice())
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.next_sibling
    }

    /// Next node in document order (first child, else next sibling, else
    /// the next sibling of the nearest ancestor that has one).
    pub fn next_in_order(&self, id: NodeId) -> Option<NodeId> {
        let next = id + 1;
        (next < self.nodes.len()).then_some(next)
    }

    /// First node after the whole subtree of `id`.
    pub fn following(&self, id: NodeId) -> Option<NodeId> {
        let end = self.nodes.get(id)?.end;
        (end < self.nodes.len()).then_some(end)
    }

    /// Strict descendants of `id`, in document order.
    pub fn descendants(&self, id: NodeId) -> Range<NodeId> {
        match self.nodes.get(id) {
            Some(n) => id + 1..n.end,
            None => 0..0,
        }
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn is_tag(&self, id: NodeId, tag: &str) -> bool {
        self.element(id).is_some_and(|el| el.name == tag)
    }

    pub fn text_node(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    /// All text under `id` (or the node itself for text), concatenated verbatim.
    pub fn text(&self, id: NodeId) -> String {
        if let Some(t) = self.text_node(id) {
            return s!(t);
        }
        self.descendants(id)
            .filter_map(|d| self.text_node(d))
            .collect()
    }

    /// First node at or after `from` in document order matching `pred`.
    pub fn find_next<P>(&self, from: NodeId, mut pred: P) -> Option<NodeId>
    where
        P: FnMut(&Document, NodeId) -> bool,
    {
        (from..self.nodes.len()).find(|&id| pred(self, id))
    }

    /// First matching node in the whole document.
    pub fn find<P>(&self, pred: P) -> Option<NodeId>
    where
        P: FnMut(&Document, NodeId) -> bool,
    {
        self.find_next(self.root(), pred)
    }

    /// First strict descendant of `id` matching `pred`.
    pub fn find_descendant<P>(&self, id: NodeId, mut pred: P) -> Option<NodeId>
    where
        P: FnMut(&Document, NodeId) -> bool,
    {
        self.descendants(id).find(|&d| pred(self, d))
    }
}
