//! Merging the scanned tree with the order file.
//!
//! The order file is edited by hand and routinely lags behind the content
//! directory in both directions, so nothing here can fail:
//! listed-and-present children come first in listed order, then every
//! unlisted child in scan order. Listed keys with no matching child are skipped.

use std::collections::BTreeSet;

use crate::model::{MenuNode, MenuTree, NodeKey, OrderMap, ROOT_KEY};

/// Reorder the whole tree, top level by the [`ROOT_KEY`] entry.
pub fn reconcile(tree: MenuTree, order: &OrderMap) -> MenuTree {
    let nodes = tree
        .nodes
        .into_iter()
        .map(|node| reconcile_node(node, order))
        .collect();

    MenuTree::new(order_children(nodes, order.get(ROOT_KEY)))
}

/// Reorder `node`'s subtree, children first.
pub fn reconcile_node(node: MenuNode, order: &OrderMap) -> MenuNode {
    let MenuNode {
        key,
        identifier,
        title,
        path,
        children,
    } = node;

    let children = children
        .into_iter()
        .map(|child| reconcile_node(child, order))
        .collect();
    let children = order_children(children, order.get(&key));

    MenuNode {
        key,
        identifier,
        title,
        path,
        children,
    }
}

fn order_children(children: Vec<MenuNode>, listed: Option<&[NodeKey]>) -> Vec<MenuNode> {
    let Some(listed) = listed else {
        return children;
    };

    let mut slots: Vec<Option<MenuNode>> = children.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());

    for key in listed {
        // Each child is emitted at most once, even if listed twice
        let slot = slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|child| &child.key == key));
        if let Some(slot) = slot {
            ordered.extend(slot.take());
        }
    }

    ordered.extend(slots.into_iter().flatten());
    ordered
}

/// A child reference of one ordering entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEntry {
    pub parent: NodeKey,
    pub child: NodeKey,
}

/// Where the order file and the scanned tree disagree.
///
/// Informational only: [`reconcile`] already tolerates all of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drift {
    /// Listed in the order file, missing on disk.
    pub dangling: Vec<DriftEntry>,
    /// On disk, missing from an existing order entry.
    pub unlisted: Vec<DriftEntry>,
    /// Order entries whose key matches no node with children.
    pub stale_keys: Vec<NodeKey>,
}

impl Drift {
    pub fn is_empty(&self) -> bool {
        self.dangling.is_empty() && self.unlisted.is_empty() && self.stale_keys.is_empty()
    }
}

pub fn drift(tree: &MenuTree, order: &OrderMap) -> Drift {
    fn compare(parent: &str, children: &[MenuNode], order: &OrderMap, drift: &mut Drift) {
        let Some(listed) = order.get(parent) else {
            return;
        };

        for key in listed {
            if !children.iter().any(|child| &child.key == key) {
                drift.dangling.push(DriftEntry {
                    parent: parent.to_string(),
                    child: key.clone(),
                });
            }
        }
        for child in children {
            if !listed.contains(&child.key) {
                drift.unlisted.push(DriftEntry {
                    parent: parent.to_string(),
                    child: child.key.clone(),
                });
            }
        }
    }

    fn walk(node: &MenuNode, order: &OrderMap, parents: &mut BTreeSet<NodeKey>, drift: &mut Drift) {
        parents.insert(node.key.clone());
        compare(&node.key, &node.children, order, drift);
        for child in &node.children {
            walk(child, order, parents, drift);
        }
    }

    let mut drift = Drift::default();
    let mut parents = BTreeSet::from([ROOT_KEY.to_string()]);

    compare(ROOT_KEY, &tree.nodes, order, &mut drift);
    for node in &tree.nodes {
        walk(node, order, &mut parents, &mut drift);
    }

    drift.stale_keys = order
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !parents.contains(*key))
        .cloned()
        .collect();

    drift
}
