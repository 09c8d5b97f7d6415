use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Reserved ordering key of the top-level menu entries.
pub const ROOT_KEY: &str = "root";

/// Ordering key of a node: slug of its path relative to the content root
pub type NodeKey = String;

/// One directory of the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Always present, also for heading-only directories.
    pub key: NodeKey,
    /// Present iff the directory holds an index page.
    pub identifier: Option<String>,
    pub title: String,
    /// Relative to the content root.
    pub path: PathBuf,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn is_heading(&self) -> bool {
        self.identifier.is_none()
    }

    /// Depth-first search for the node addressable by `identifier`.
    pub fn find(&self, identifier: &str) -> Option<&MenuNode> {
        if self.identifier.as_deref() == Some(identifier) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(identifier))
    }
}

/// Synthetic top level of the menu, ordered by the [`ROOT_KEY`] entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    pub nodes: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn find(&self, identifier: &str) -> Option<&MenuNode> {
        self.nodes.iter().find_map(|node| node.find(identifier))
    }

    /// All identifiers in depth-first order.
    pub fn identifiers(&self) -> Vec<&str> {
        fn collect<'a>(node: &'a MenuNode, out: &mut Vec<&'a str>) {
            if let Some(id) = node.identifier.as_deref() {
                out.push(id);
            }
            for child in &node.children {
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        for node in &self.nodes {
            collect(node, &mut out);
        }
        out
    }
}

/// Ordering key => child keys in the desired order.
///
/// Backed by a `BTreeMap` so the YAML written to disk has sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderMap {
    entries: BTreeMap<NodeKey, Vec<NodeKey>>,
}

impl OrderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[NodeKey]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: impl Into<NodeKey>, children: Vec<NodeKey>) {
        self.entries.insert(key.into(), children);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeKey, &Vec<NodeKey>)> {
        self.entries.iter()
    }

    /// Default order reflecting the tree as scanned.
    ///
    /// One [`ROOT_KEY`] entry for the top level, plus one entry per node
    /// that has children, keyed by that node's key.
    pub fn synthesize(tree: &MenuTree) -> Self {
        fn walk(node: &MenuNode, order: &mut OrderMap) {
            if !node.children.is_empty() {
                let keys = node.children.iter().map(|c| c.key.clone()).collect();
                order.insert(node.key.clone(), keys);
            }
            for child in &node.children {
                walk(child, order);
            }
        }

        let mut order = OrderMap::new();
        order.insert(
            ROOT_KEY,
            tree.nodes.iter().map(|n| n.key.clone()).collect(),
        );
        for node in &tree.nodes {
            walk(node, &mut order);
        }
        order
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, treat it as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl<K: Into<NodeKey>> FromIterator<(K, Vec<NodeKey>)> for OrderMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<NodeKey>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
