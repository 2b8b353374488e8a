//! A threaded, height-balanced binary tree built in one shot from an
//! already-sorted sequence (spec §3 "Threaded binary tree node").
//!
//! Construction is the recursive-midpoint split the teacher's arena
//! style makes trivial to express without recursion through
//! `Rc<RefCell<_>>`; threading is a single inorder pass wiring each
//! node's `prev`/`next` to its inorder neighbor (or, circularly, to the
//! far end).

use crate::tree::node::{Arena, Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct ThreadedBinTree<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
}

impl<T: Clone> ThreadedBinTree<T> {
    pub fn empty() -> Self {
        ThreadedBinTree { arena: Arena::new(), root: None }
    }

    /// Builds a balanced tree from `items`, assumed already sorted by
    /// whatever order the caller cares about (the tree itself imposes
    /// none — see spec §3: chain order is the input sequence's order).
    /// `circular` controls whether the first node's `prev` and the
    /// last node's `next` wrap around or stay `None`.
    pub fn from_sorted(items: Vec<T>, circular: bool) -> Self {
        if items.is_empty() {
            return Self::empty();
        }

        let mut arena = Arena::new();
        let root = Self::build(&mut arena, &items, 0, items.len() as i64 - 1);
        let mut tree = ThreadedBinTree { arena, root };
        tree.thread(circular);
        tree
    }

    fn build(arena: &mut Arena<T>, items: &[T], left: i64, right: i64) -> Option<NodeId> {
        if left > right {
            return None;
        }
        let mid = (left + right) / 2;
        let id = arena.push(items[mid as usize].clone());
        let l = Self::build(arena, items, left, mid - 1);
        let r = Self::build(arena, items, mid + 1, right);
        arena.get_mut(id).left = l;
        arena.get_mut(id).right = r;
        arena.set_height(id);
        Some(id)
    }

    fn thread(&mut self, circular: bool) {
        let Some(root) = self.root else { return };
        let order = self.arena.traverse_inorder(root);
        let n = order.len();

        for (i, &id) in order.iter().enumerate() {
            let left = self.arena.get(id).left;
            let right = self.arena.get(id).right;
            let prev = left.unwrap_or(order[(i + n - 1) % n]);
            let next = right.unwrap_or(order[(i + 1) % n]);
            self.arena.get_mut(id).prev = Some(prev);
            self.arena.get_mut(id).next = Some(next);
        }

        if !circular {
            self.arena.get_mut(order[0]).prev = None;
            self.arena.get_mut(order[n - 1]).next = None;
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id)
    }

    pub fn inorder(&self) -> Vec<NodeId> {
        match self.root {
            Some(root) => self.arena.traverse_inorder(root),
            None => Vec::new(),
        }
    }

    /// Appends a bare node with no links. Used by [`crate::tree::serde_tree`]
    /// to rebuild a tree from its dumped form, where links are resolved in
    /// a second pass once every node exists.
    pub fn push_raw(&mut self, data: T) -> NodeId {
        self.arena.push(data)
    }

    pub fn set_links_raw(
        &mut self,
        id: NodeId,
        left: Option<NodeId>,
        right: Option<NodeId>,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    ) {
        let node = self.arena.get_mut(id);
        node.left = left;
        node.right = right;
        node.prev = prev;
        node.next = next;
    }

    pub fn set_root_raw(&mut self, root: Option<NodeId>) {
        self.root = root;
    }
}
