//! Arena-backed tree storage shared by the plain AVL tree and the
//! threaded chain-search tree.
//!
//! Purpose
//! - The teacher represents its oriented-edge graph as a flat
//!   `Vec<Ridge>`/`Vec<EdgeData>` addressed by newtype ids
//!   (`RidgeId`/`FacetId`, `oriented_edge/types.rs`) rather than
//!   `Rc<RefCell<_>>` pointers. The threaded tree's `prev`/`next`
//!   threads are specified as genuinely circular (spec §5, §9); an
//!   arena represents a cycle as two plain integers — no leaked `Rc`
//!   cycle, no runtime borrow checks, and serialization is simply
//!   "read the index" instead of "walk a graph and hope not to loop."

/// An index into a [`Arena`]. Never invalidated by further insertions;
/// only by `Arena::clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct Node<T> {
    pub data: T,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// Matches the source convention: a leaf has height 0, not 1.
    pub height: i64,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl<T> Node<T> {
    fn leaf(data: T) -> Self {
        Node { data, left: None, right: None, height: 0, prev: None, next: None }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Owns every node of one or more trees built from the same arena.
/// Trees are identified by their root `NodeId`; the arena itself has
/// no notion of "the" root.
#[derive(Debug, Clone, Default)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    pub fn push(&mut self, data: T) -> NodeId {
        self.nodes.push(Node::leaf(data));
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    pub fn height_of(&self, id: Option<NodeId>) -> i64 {
        id.map(|id| self.get(id).height + 1).unwrap_or(0)
    }

    /// Recomputes `height` from the current children. Leaves get 0,
    /// matching the source convention.
    pub fn set_height(&mut self, id: NodeId) {
        let node = self.get(id);
        let h = if node.left.is_none() && node.right.is_none() {
            0
        } else {
            let left_h = self.height_of(node.left);
            let right_h = self.height_of(node.right);
            left_h.max(right_h)
        };
        self.get_mut(id).height = h;
    }

    /// `right.height - left.height`, treating a missing child as
    /// height -1 so that, e.g., a single right child yields `+2`
    /// (matches the source's `(child.height if child else 0)` relative
    /// to a leaf's own height of 0 — see `balance_factor` tests).
    pub fn balance_factor(&self, id: NodeId) -> i64 {
        let node = self.get(id);
        let left = node.left.map(|c| self.get(c).height + 1).unwrap_or(0);
        let right = node.right.map(|c| self.get(c).height + 1).unwrap_or(0);
        right - left
    }

    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(l) = self.get(id).left {
            id = l;
        }
        id
    }

    pub fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(r) = self.get(id).right {
            id = r;
        }
        id
    }

    /// Inorder traversal starting at `root`.
    pub fn traverse_inorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.traverse_inorder_into(root, &mut out);
        out
    }

    fn traverse_inorder_into(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let node = self.get(id);
        if let Some(l) = node.left {
            self.traverse_inorder_into(l, out);
        }
        out.push(id);
        if let Some(r) = node.right {
            self.traverse_inorder_into(r, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_height_is_zero() {
        let mut arena = Arena::new();
        let id = arena.push(42);
        assert_eq!(arena.get(id).height, 0);
        assert_eq!(arena.balance_factor(id), 0);
    }

    #[test]
    fn inorder_matches_construction() {
        let mut arena: Arena<i32> = Arena::new();
        let left = arena.push(1);
        let mid = arena.push(2);
        let right = arena.push(3);
        arena.get_mut(mid).left = Some(left);
        arena.get_mut(mid).right = Some(right);
        arena.set_height(mid);
        let order: Vec<i32> = arena.traverse_inorder(mid).iter().map(|id| arena.get(*id).data).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
