//! The chain search tree: a balanced threaded tree over monotone chains
//! (spec §4.E), and the descent that locates a query point between two
//! consecutive chains (spec §4.F).

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::geom::{orient, Orientation, Point};
use crate::graph::EdgeLike;
use crate::tree::{NodeId, ThreadedBinTree};

/// One step of the descent through the chain search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDirection {
    Left,
    Right,
    Prev,
    Next,
}

/// A chain search tree node's payload: the chain itself, plus its
/// position in the original left-to-right chain list. The index lets
/// `search` recognize "this is the leftmost/rightmost chain" by
/// identity rather than by (fallible) content comparison — see
/// `ChainNode::is_leftmost`/`is_rightmost`.
#[derive(Debug, Clone)]
pub struct ChainNode {
    pub index: usize,
    pub chain: Chain,
}

impl ChainNode {
    /// Where `point` falls relative to this chain: `Left` if the chain
    /// passes to the right of `point` at `point`'s height, `Right` if
    /// to the left, `Straight` if the point lies on the chain.
    pub fn turn(&self, point: &Point) -> Result<Orientation> {
        for edge in &self.chain {
            let (first, second) = (edge.first(), edge.second());

            if first.y() == point.y() && point.y() == second.y() {
                if point.x() < first.x() {
                    return Ok(Orientation::Left);
                }
                if point.x() > second.x() {
                    return Ok(Orientation::Right);
                }
                return Ok(Orientation::Straight);
            }

            if first.y() <= point.y() && point.y() <= second.y() {
                return Ok(orient(first, second, point));
            }
        }

        Err(Error::domain_failure(format!("no edge of the chain brackets the height of {point}")))
    }
}

pub type ChainsSearchTree = ThreadedBinTree<ChainNode>;

/// Builds the balanced threaded search tree over `chains`, in their
/// given (left-to-right) order.
pub fn build_search_tree(chains: Vec<Chain>) -> ChainsSearchTree {
    let nodes: Vec<ChainNode> = chains.into_iter().enumerate().map(|(index, chain)| ChainNode { index, chain }).collect();
    ThreadedBinTree::from_sorted(nodes, true)
}

/// Descends the tree to find the pair of consecutive chains that
/// bracket `point` (or a single chain, twice, if `point` lies exactly
/// on it). Returns the path taken alongside the bracketing pair.
pub fn search(point: &Point, tree: &ChainsSearchTree, chain_count: usize) -> Result<(Vec<PathDirection>, (Option<Chain>, Option<Chain>))> {
    let Some(root) = tree.root() else {
        return Err(Error::domain_failure("cannot search an empty chain tree"));
    };

    let mut path = Vec::new();
    let mut current = root;

    loop {
        let node = tree.node(current);
        let is_leaf = node.is_leaf();
        let turn = node.data.turn(point)?;

        if is_leaf {
            return match turn {
                Orientation::Straight => Ok((path, (Some(node.data.chain.clone()), Some(node.data.chain.clone())))),
                Orientation::Left => {
                    if node.data.index == 0 {
                        return Ok((path, (None, Some(node.data.chain.clone()))));
                    }
                    path.push(PathDirection::Prev);
                    let prev = node.prev.expect("threaded tree node always has prev");
                    Ok((path, (Some(tree.node(prev).data.chain.clone()), Some(node.data.chain.clone()))))
                }
                Orientation::Right => {
                    if node.data.index == chain_count - 1 {
                        return Ok((path, (Some(node.data.chain.clone()), None)));
                    }
                    path.push(PathDirection::Next);
                    let next = node.next.expect("threaded tree node always has next");
                    Ok((path, (Some(node.data.chain.clone()), Some(tree.node(next).data.chain.clone()))))
                }
            };
        }

        match turn {
            Orientation::Straight => return Ok((path, (Some(node.data.chain.clone()), Some(node.data.chain.clone())))),
            Orientation::Left => {
                if node.data.index == 0 {
                    return Ok((path, (None, Some(node.data.chain.clone()))));
                }
                path.push(PathDirection::Left);
                current = node.left.expect("non-leaf node has a left child");
            }
            Orientation::Right => {
                if node.data.index == chain_count - 1 {
                    return Ok((path, (Some(node.data.chain.clone()), None)));
                }
                path.push(PathDirection::Right);
                current = node.right.expect("non-leaf node has a right child");
            }
        }
    }
}
