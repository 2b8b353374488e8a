//! The oriented planar straight-line graph: every edge points from its
//! lower endpoint (by `(y, x)`) to its upper one, and carries a mutable
//! weight used by regularization and chain extraction (spec §4.B, §4.E).

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::geom::{by_y_then_x, Point};
use crate::graph::edge::{sort_ascending_polar, sort_descending_polar, EdgeLike};
use crate::graph::pslg::{PlanarStraightLineGraph, PslgEdge};

/// A directed edge. Equality and hashing are *ordered* and ignore
/// weight (spec §3). Weight lives behind `Rc<Cell<f64>>`: every clone
/// of an `OrientedEdge` (e.g. the copy returned by `inward_edges`/
/// `outward_edges`, or the copy appended to a [`Chain`](crate::chain::Chain))
/// refers to the same logical edge and mutating one mutates all of
/// them, exactly as the regularization/balancing/chain-extraction
/// passes need (spec §9's "Deep-copy-at-snapshot" note is what makes
/// this safe: snapshots are produced with [`OrientedEdge::deep_clone`],
/// which allocates a fresh cell, rather than plain `Clone`, which
/// shares it).
#[derive(Debug, Clone)]
pub struct OrientedEdge {
    first: Point,
    second: Point,
    weight: Rc<Cell<f64>>,
    name: Option<String>,
}

impl OrientedEdge {
    pub fn new(first: Point, second: Point) -> Self {
        OrientedEdge { first, second, weight: Rc::new(Cell::new(0.0)), name: None }
    }

    pub fn with_weight(first: Point, second: Point, weight: f64) -> Self {
        OrientedEdge { first, second, weight: Rc::new(Cell::new(weight)), name: None }
    }

    pub fn named(first: Point, second: Point, name: impl Into<String>) -> Self {
        OrientedEdge { first, second, weight: Rc::new(Cell::new(0.0)), name: Some(name.into()) }
    }

    pub fn with_weight_named(first: Point, second: Point, weight: f64, name: impl Into<String>) -> Self {
        OrientedEdge { first, second, weight: Rc::new(Cell::new(weight)), name: Some(name.into()) }
    }

    pub fn weight(&self) -> f64 {
        self.weight.get()
    }

    pub fn set_weight(&self, weight: f64) {
        self.weight.set(weight);
    }

    pub fn add_weight(&self, delta: f64) {
        self.weight.set(self.weight.get() + delta);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reversed(&self) -> Self {
        OrientedEdge {
            first: self.second.clone(),
            second: self.first.clone(),
            weight: Rc::new(Cell::new(self.weight.get())),
            name: self.name.clone(),
        }
    }

    /// A true independent copy: a new weight cell with the current
    /// value, not a shared reference. Used when producing pipeline
    /// snapshots that must not see later mutation (spec §5, §9).
    pub fn deep_clone(&self) -> Self {
        OrientedEdge {
            first: self.first.clone(),
            second: self.second.clone(),
            weight: Rc::new(Cell::new(self.weight.get())),
            name: self.name.clone(),
        }
    }

    /// Upward-oriented edge derived from an undirected PSLG edge: the
    /// lower endpoint (by `(y, x)`) becomes `first`. The name, if any,
    /// carries over unchanged.
    pub fn upward_from_pslg_edge(edge: &PslgEdge) -> Self {
        let (lower, upper) = if by_y_then_x(edge.first()) <= by_y_then_x(edge.second()) {
            (edge.first().clone(), edge.second().clone())
        } else {
            (edge.second().clone(), edge.first().clone())
        };
        match edge.name() {
            Some(name) => OrientedEdge::with_weight_named(lower, upper, edge.weight(), name),
            None => OrientedEdge::with_weight(lower, upper, edge.weight()),
        }
    }
}

impl EdgeLike for OrientedEdge {
    fn first(&self) -> &Point {
        &self.first
    }
    fn second(&self) -> &Point {
        &self.second
    }
}

impl PartialEq for OrientedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}
impl Eq for OrientedEdge {}

impl Hash for OrientedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

/// An oriented planar straight-line graph: every edge runs from its
/// lower endpoint to its upper one in `(y, x)` order.
#[derive(Debug, Clone, Default)]
pub struct OrientedPlanarStraightLineGraph {
    nodes: HashSet<Point>,
    edges: HashSet<OrientedEdge>,
}

impl OrientedPlanarStraightLineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes_edges(nodes: HashSet<Point>, edges: HashSet<OrientedEdge>) -> Self {
        OrientedPlanarStraightLineGraph { nodes, edges }
    }

    pub fn nodes(&self) -> &HashSet<Point> {
        &self.nodes
    }

    pub fn edges(&self) -> &HashSet<OrientedEdge> {
        &self.edges
    }

    pub fn add_node(&mut self, node: Point) {
        self.nodes.insert(node);
    }

    /// Unlike the undirected PSLG, both directions between the same
    /// pair of nodes can coexist (spec §3).
    pub fn add_edge(&mut self, edge: OrientedEdge) {
        self.nodes.insert(edge.first.clone());
        self.nodes.insert(edge.second.clone());
        self.edges.insert(edge);
    }

    pub fn has_node(&self, node: &Point) -> bool {
        self.nodes.contains(node)
    }

    pub fn has_edge(&self, edge: &OrientedEdge) -> bool {
        self.edges.contains(edge)
    }

    pub fn remove_node(&mut self, node: &Point) {
        self.nodes.remove(node);
        self.edges.retain(|e| e.first != *node && e.second != *node);
    }

    pub fn remove_edge(&mut self, edge: &OrientedEdge) {
        self.edges.remove(edge);
    }

    pub fn edges_of(&self, node: &Point) -> Vec<OrientedEdge> {
        self.edges.iter().filter(|e| e.first == *node || e.second == *node).cloned().collect()
    }

    /// Edges where `node` is the target, sorted ascending by
    /// nonnegative polar angle of the source.
    pub fn inward_edges(&self, node: &Point) -> Vec<OrientedEdge> {
        let inward: Vec<OrientedEdge> = self.edges.iter().filter(|e| e.second == *node).cloned().collect();
        sort_ascending_polar(node, inward)
    }

    /// Edges where `node` is the source, sorted descending by
    /// (signed) polar angle of the target.
    pub fn outward_edges(&self, node: &Point) -> Vec<OrientedEdge> {
        let outward: Vec<OrientedEdge> = self.edges.iter().filter(|e| e.first == *node).cloned().collect();
        sort_descending_polar(node, outward)
    }

    /// Orients every edge of `pslg` upward (lower endpoint by `(y, x)`
    /// to the higher one); weight is preserved (spec §4.B).
    pub fn from_planar_straight_line_graph(pslg: &PlanarStraightLineGraph) -> Self {
        let nodes = pslg.nodes().clone();
        let edges = pslg.edges().iter().map(OrientedEdge::upward_from_pslg_edge).collect();
        OrientedPlanarStraightLineGraph { nodes, edges }
    }

    /// The global minimum/maximum node by `(y, x)` order. `None` only
    /// for the empty graph.
    pub fn min_node(&self) -> Option<&Point> {
        self.nodes.iter().min_by(|a, b| by_y_then_x(a).partial_cmp(&by_y_then_x(b)).unwrap())
    }

    pub fn max_node(&self) -> Option<&Point> {
        self.nodes.iter().max_by(|a, b| by_y_then_x(a).partial_cmp(&by_y_then_x(b)).unwrap())
    }

    /// Every node other than the global minimum has an inward edge,
    /// and every node other than the global maximum has an outward
    /// edge (spec §4.B).
    pub fn is_regular(&self) -> bool {
        let (Some(min), Some(max)) = (self.min_node(), self.max_node()) else {
            return true;
        };
        self.nodes.iter().all(|node| {
            (node == min || !self.inward_edges(node).is_empty()) && (node == max || !self.outward_edges(node).is_empty())
        })
    }

    /// An independent deep copy: every edge gets a fresh weight cell,
    /// decoupling this snapshot from later mutation of the original
    /// (spec §5, §9).
    pub fn deep_clone(&self) -> Self {
        OrientedPlanarStraightLineGraph {
            nodes: self.nodes.clone(),
            edges: self.edges.iter().map(OrientedEdge::deep_clone).collect(),
        }
    }
}

impl PartialEq for OrientedPlanarStraightLineGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}
