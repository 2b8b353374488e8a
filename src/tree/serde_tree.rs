//! Structural dump/load for a [`ThreadedBinTree`] (spec §6, §9).
//!
//! This is the "nested key-value form" the spec explicitly distinguishes
//! from any wire format: `left`/`right` serialize as ordinary nested
//! sub-objects (the tree's own shape), while only `prev`/`next` -
//! including the circular wraparound - are rewritten to inorder-rank
//! integers, since those are the links a straightforward nested dump
//! can't express without cycles.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tree::node::NodeId;
use crate::tree::threaded::ThreadedBinTree;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpedNode<T> {
    pub data: T,
    pub left: Option<Box<DumpedNode<T>>>,
    pub right: Option<Box<DumpedNode<T>>>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpedTree<T> {
    pub root: Option<DumpedNode<T>>,
}

/// Dumps `tree` into its nested key-value form: `left`/`right` nest
/// recursively, `prev`/`next` are rewritten to inorder rank.
pub fn dump<T: Clone>(tree: &ThreadedBinTree<T>) -> DumpedTree<T> {
    let order = tree.inorder();
    let index_of: std::collections::HashMap<NodeId, usize> = order.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    fn dump_node<T: Clone>(tree: &ThreadedBinTree<T>, id: NodeId, index_of: &std::collections::HashMap<NodeId, usize>) -> DumpedNode<T> {
        let node = tree.node(id);
        DumpedNode {
            data: node.data.clone(),
            left: node.left.map(|c| Box::new(dump_node(tree, c, index_of))),
            right: node.right.map(|c| Box::new(dump_node(tree, c, index_of))),
            prev: node.prev.map(|c| index_of[&c]),
            next: node.next.map(|c| index_of[&c]),
        }
    }

    DumpedTree { root: tree.root().map(|r| dump_node(tree, r, &index_of)) }
}

/// Dumps `tree` straight to a [`serde_json::Value`] (spec §9's "nested
/// key-value form").
pub fn dump_to_json<T: Clone + Serialize>(tree: &ThreadedBinTree<T>) -> Result<serde_json::Value> {
    serde_json::to_value(dump(tree)).map_err(|e| Error::validation_failure(format!("failed to dump tree: {e}")))
}

/// Rebuilds a tree from its dumped form. Nodes are re-pushed in inorder
/// (left, self, right), so the arena index assigned to each node during
/// the rebuild equals its original inorder rank - exactly what `prev`/
/// `next` index into. Out-of-range `prev`/`next` indices are a
/// validation failure rather than a panic.
pub fn load<T: Clone>(dumped: DumpedTree<T>) -> Result<ThreadedBinTree<T>> {
    let mut tree = ThreadedBinTree::empty();
    let Some(root) = dumped.root else {
        return Ok(tree);
    };

    let mut links: Vec<(NodeId, Option<NodeId>, Option<NodeId>, Option<usize>, Option<usize>)> = Vec::new();

    fn build<T: Clone>(
        tree: &mut ThreadedBinTree<T>,
        node: &DumpedNode<T>,
        links: &mut Vec<(NodeId, Option<NodeId>, Option<NodeId>, Option<usize>, Option<usize>)>,
    ) -> NodeId {
        let left = node.left.as_ref().map(|l| build(tree, l, links));
        let id = tree.push_raw(node.data.clone());
        let right = node.right.as_ref().map(|r| build(tree, r, links));
        links.push((id, left, right, node.prev, node.next));
        id
    }

    let root_id = build(&mut tree, &root, &mut links);
    let n = links.len();
    for (_, _, _, prev, next) in &links {
        for idx in [*prev, *next] {
            if let Some(i) = idx {
                if i >= n {
                    return Err(Error::validation_failure(format!("index {i} out of range for {n} nodes")));
                }
            }
        }
    }
    for (id, left, right, prev, next) in links {
        tree.set_links_raw(id, left, right, prev.map(NodeId), next.map(NodeId));
    }
    tree.set_root_raw(Some(root_id));

    Ok(tree)
}

pub fn load_from_json<T: Clone + for<'de> Deserialize<'de>>(value: serde_json::Value) -> Result<ThreadedBinTree<T>> {
    let dumped: DumpedTree<T> =
        serde_json::from_value(value).map_err(|e| Error::validation_failure(format!("failed to load tree: {e}")))?;
    load(dumped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let tree = ThreadedBinTree::from_sorted(vec![1, 2, 3, 4, 5], true);
        let json = dump_to_json(&tree).unwrap();
        let restored: ThreadedBinTree<i32> = load_from_json(json).unwrap();
        let order: Vec<i32> = restored.inorder().iter().map(|id| restored.node(*id).data).collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn round_trip_preserves_circular_threads() {
        let tree = ThreadedBinTree::from_sorted(vec!["a", "b", "c"], true);
        let dumped = dump(&tree);
        let restored = load(dumped).unwrap();
        let order = restored.inorder();
        let last = restored.node(order[order.len() - 1]);
        assert_eq!(last.next, Some(order[0]));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let bad: DumpedTree<i32> =
            DumpedTree { root: Some(DumpedNode { data: 1, left: None, right: None, prev: Some(9), next: None }) };
        assert!(load(bad).is_err());
    }
}
