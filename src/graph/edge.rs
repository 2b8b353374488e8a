//! Shared capability set for the two edge kinds this crate needs
//! (undirected [`PslgEdge`](crate::graph::PslgEdge) and oriented
//! [`OrientedEdge`](crate::graph::OrientedEdge)): endpoints, weight,
//! `other_node`, and the polar-angle sort inward/outward edge lists
//! share (spec §3, §9 "Polymorphism over edge kinds" — tagged variants
//! with a shared capability set rather than a class hierarchy).

use crate::error::{Error, Result};
use crate::geom::{nonneg_polar_angle, polar_angle, Point};

pub trait EdgeLike {
    fn first(&self) -> &Point;
    fn second(&self) -> &Point;

    /// The endpoint of this edge that is not `node`.
    fn other_node(&self, node: &Point) -> Result<Point> {
        if self.first() == node {
            Ok(self.second().clone())
        } else if self.second() == node {
            Ok(self.first().clone())
        } else {
            Err(Error::validation_failure(format!("node {node} is absent in this edge")))
        }
    }
}

/// Sort edges by ascending nonnegative polar angle of their other
/// endpoint around `node` — the inward convention (spec §3).
pub fn sort_ascending_polar<E: EdgeLike>(node: &Point, mut edges: Vec<E>) -> Vec<E> {
    edges.sort_by(|a, b| {
        let angle_a = nonneg_polar_angle(&a.other_node(node).expect("edge incident to node"), node);
        let angle_b = nonneg_polar_angle(&b.other_node(node).expect("edge incident to node"), node);
        angle_a.partial_cmp(&angle_b).expect("polar angles are finite")
    });
    edges
}

/// Sort edges by descending (signed) polar angle of their other
/// endpoint around `node` — the outward convention (spec §3).
pub fn sort_descending_polar<E: EdgeLike>(node: &Point, mut edges: Vec<E>) -> Vec<E> {
    edges.sort_by(|a, b| {
        let angle_a = polar_angle(&a.other_node(node).expect("edge incident to node"), node);
        let angle_b = polar_angle(&b.other_node(node).expect("edge incident to node"), node);
        angle_b.partial_cmp(&angle_a).expect("polar angles are finite")
    });
    edges
}
