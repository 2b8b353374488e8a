//! A standalone height-balanced (AVL) binary search tree: insert,
//! delete, and the rotations that keep it balanced (spec §4 "AVL
//! auxiliary"). The threaded chain-search tree (`threaded.rs`) is
//! built by balanced bulk construction rather than repeated insertion,
//! but shares this module's rotation/height bookkeeping conventions.

use crate::tree::node::{Arena, NodeId};

#[derive(Debug, Clone, Default)]
pub struct AvlTree<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
}

impl<T: Ord + Clone> AvlTree<T> {
    pub fn new() -> Self {
        AvlTree { arena: Arena::new(), root: None }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub fn height(&self) -> i64 {
        match self.root {
            None => -1,
            Some(id) => self.arena.get(id).height,
        }
    }

    pub fn insert(&mut self, data: T) {
        self.root = Some(self.insert_rec(self.root, data));
    }

    fn insert_rec(&mut self, node: Option<NodeId>, data: T) -> NodeId {
        let Some(id) = node else {
            return self.arena.push(data);
        };

        if data < self.arena.get(id).data {
            let new_left = self.insert_rec(self.arena.get(id).left, data);
            self.arena.get_mut(id).left = Some(new_left);
        } else {
            let new_right = self.insert_rec(self.arena.get(id).right, data);
            self.arena.get_mut(id).right = Some(new_right);
        }

        self.arena.set_height(id);
        self.rebalance(id)
    }

    pub fn delete(&mut self, data: &T) {
        self.root = self.delete_rec(self.root, data);
    }

    fn delete_rec(&mut self, node: Option<NodeId>, data: &T) -> Option<NodeId> {
        let id = node?;

        if data < &self.arena.get(id).data {
            let new_left = self.delete_rec(self.arena.get(id).left, data);
            self.arena.get_mut(id).left = new_left;
        } else if data > &self.arena.get(id).data {
            let new_right = self.delete_rec(self.arena.get(id).right, data);
            self.arena.get_mut(id).right = new_right;
        } else {
            let (left, right) = (self.arena.get(id).left, self.arena.get(id).right);
            match (left, right) {
                (None, None) => return None,
                (Some(only), None) | (None, Some(only)) => return Some(only),
                (Some(_), Some(right_id)) => {
                    let successor = self.arena.leftmost(right_id);
                    let successor_data = self.arena.get(successor).data.clone();
                    let new_right = self.delete_rec(Some(right_id), &successor_data);
                    self.arena.get_mut(id).data = successor_data;
                    self.arena.get_mut(id).right = new_right;
                }
            }
        }

        self.arena.set_height(id);
        Some(self.rebalance(id))
    }

    fn rebalance(&mut self, id: NodeId) -> NodeId {
        let bf = self.arena.balance_factor(id);

        if bf == -2 {
            let left = self.arena.get(id).left.expect("bf -2 implies a left child");
            if self.arena.balance_factor(left) == 1 {
                let new_left = self.rotate_left(left);
                self.arena.get_mut(id).left = Some(new_left);
            }
            return self.rotate_right(id);
        }
        if bf == 2 {
            let right = self.arena.get(id).right.expect("bf 2 implies a right child");
            if self.arena.balance_factor(right) == -1 {
                let new_right = self.rotate_right(right);
                self.arena.get_mut(id).right = Some(new_right);
            }
            return self.rotate_left(id);
        }

        id
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let heavy = self.arena.get(id).right.expect("rotate_left requires a right child");
        let swapped = self.arena.get(heavy).left;
        self.arena.get_mut(heavy).left = Some(id);
        self.arena.get_mut(id).right = swapped;

        self.arena.set_height(id);
        self.arena.set_height(heavy);
        heavy
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let heavy = self.arena.get(id).left.expect("rotate_right requires a left child");
        let swapped = self.arena.get(heavy).right;
        self.arena.get_mut(heavy).right = Some(id);
        self.arena.get_mut(id).left = swapped;

        self.arena.set_height(id);
        self.arena.set_height(heavy);
        heavy
    }
}
